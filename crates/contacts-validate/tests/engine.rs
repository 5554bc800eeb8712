//! End-to-end tests for the chunked validation engine.

use std::io::Write;
use std::path::Path;

use serde_json::json;
use tempfile::NamedTempFile;

use contacts_model::{DuplicateField, HeaderSet, ValidationReport};
use contacts_validate::{EngineOptions, validate_file};

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

async fn run(path: &Path, headers: &HeaderSet, chunk_size: usize) -> (ValidationReport, Vec<u8>) {
    let mut percents = Vec::new();
    let report = validate_file(path, headers, EngineOptions { chunk_size }, |p| {
        percents.push(p);
    })
    .await
    .expect("validation run");
    (report, percents)
}

fn headers_with_email() -> HeaderSet {
    ["phonenumber", "email", "var1"].into_iter().collect()
}

fn headers_without_email() -> HeaderSet {
    ["phonenumber", "var1"].into_iter().collect()
}

#[tokio::test]
async fn partitions_every_row_exactly_once() {
    let file = csv_file(
        "phonenumber,var1\n\
         9876543210,hello\n\
         12345,bad phone\n\
         9123456789,ok\n\
         9876543210,repeat\n\
         ,missing\n",
    );
    let (report, _) = run(file.path(), &headers_without_email(), 2).await;

    assert_eq!(report.total_rows(), 5);
    assert_eq!(report.valid_count(), 2);
    assert_eq!(report.invalid_count(), 3);

    let mut invalid_indices: Vec<u64> = report
        .invalid_rows
        .iter()
        .map(|r| r.original_index)
        .collect();
    invalid_indices.sort_unstable();
    assert_eq!(invalid_indices, vec![2, 4, 5]);
}

#[tokio::test]
async fn duplicate_pair_scenario() {
    let file = csv_file(
        "phonenumber,email,var1\n\
         9876543210,a@b.com,hi\n\
         +919876543210,a@b.com,hello\n",
    );
    let (report, _) = run(file.path(), &headers_with_email(), 10).await;

    // The first occurrence is never flagged.
    assert_eq!(report.valid_count(), 1);
    assert_eq!(report.valid_rows[0].get("phonenumber"), "9876543210");

    assert_eq!(report.invalid_count(), 1);
    let second = &report.invalid_rows[0];
    assert_eq!(second.original_index, 2);
    assert_eq!(
        second.errors,
        vec![
            "Duplicate phone number (also in rows: 1)".to_string(),
            "Duplicate email (also in rows: 1)".to_string(),
        ]
    );

    assert_eq!(report.duplicate_count(), 2);
    assert_eq!(report.duplicates[0].field, DuplicateField::Phonenumber);
    assert_eq!(report.duplicates[0].value, "+919876543210");
    assert_eq!(report.duplicates[0].rows, vec![1, 2]);
    assert_eq!(report.duplicates[1].field, DuplicateField::Email);
    assert_eq!(report.duplicates[1].value, "a@b.com");
    assert_eq!(report.duplicates[1].rows, vec![1, 2]);
}

#[tokio::test]
async fn email_rule_skipped_without_email_column() {
    let file = csv_file("phonenumber,var1\n6123456789,ok\n");
    let (report, _) = run(file.path(), &headers_without_email(), 10).await;
    assert_eq!(report.valid_count(), 1);
    assert_eq!(report.invalid_count(), 0);
}

#[tokio::test]
async fn duplicates_invalidate_rows_that_also_fail_the_schema() {
    let file = csv_file("phonenumber,var1\n12345,hi\n12345,yo\n");
    let (report, _) = run(file.path(), &headers_without_email(), 10).await;

    assert_eq!(report.invalid_count(), 2);
    let second = &report.invalid_rows[1];
    assert_eq!(
        second.errors,
        vec![
            "Must be a valid Indian phone number (10 digits with 91 or +91 country code)"
                .to_string(),
            "Duplicate phone number (also in rows: 1)".to_string(),
        ]
    );
}

#[tokio::test]
async fn duplicate_chain_grows_across_chunks() {
    let file = csv_file(
        "phonenumber,var1\n\
         9876543210,a\n\
         919876543210,b\n\
         +919876543210,c\n\
         9876543210,d\n",
    );
    let (report, _) = run(file.path(), &headers_without_email(), 1).await;

    let messages: Vec<&str> = report
        .invalid_rows
        .iter()
        .flat_map(|r| r.errors.iter().map(String::as_str))
        .collect();
    assert_eq!(
        messages,
        vec![
            "Duplicate phone number (also in rows: 1)",
            "Duplicate phone number (also in rows: 1, 2)",
            "Duplicate phone number (also in rows: 1, 2, 3)",
        ]
    );
    let last = report.duplicates.last().expect("duplicate entries");
    assert_eq!(last.rows, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn progress_is_monotonic_and_ends_at_100() {
    let file = csv_file("phonenumber,var1\na,1\nb,2\nc,3\nd,4\ne,5\n");
    let (_, percents) = run(file.path(), &headers_without_email(), 2).await;

    assert_eq!(percents, vec![40, 80, 100]);
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(percents.last().copied(), Some(100));
}

#[tokio::test]
async fn zero_rows_resolve_empty_with_final_progress() {
    let file = csv_file("phonenumber,email,var1\n");
    let (report, percents) = run(file.path(), &headers_with_email(), 10).await;

    assert!(report.valid_rows.is_empty());
    assert!(report.invalid_rows.is_empty());
    assert!(report.duplicates.is_empty());
    assert_eq!(percents, vec![100]);
}

#[tokio::test]
async fn report_is_independent_of_chunk_size() {
    let contents = "phonenumber,email,var1\n\
                    9876543210,a@b.com,hi\n\
                    12345,bad,oops\n\
                    +919876543210,A@B.com,again\n\
                    9123456789,c@d.com,fine\n";
    let file = csv_file(contents);
    let headers = headers_with_email();

    let (baseline, _) = run(file.path(), &headers, 100).await;
    for chunk_size in [1, 2, 3] {
        let (report, _) = run(file.path(), &headers, chunk_size).await;
        assert_eq!(report, baseline, "chunk size {chunk_size} diverged");
    }
}

#[tokio::test]
async fn valid_rows_keep_originally_parsed_values() {
    let file = csv_file("phonenumber,var1\n9876543210,hi\n");
    let (report, _) = run(file.path(), &headers_without_email(), 10).await;
    // Canonical +91 form is a duplicate key, not what the caller receives.
    assert_eq!(report.valid_rows[0].get("phonenumber"), "9876543210");
}

#[tokio::test]
async fn malformed_rows_are_validated_best_effort() {
    let file = csv_file("phonenumber,email,var1\n9876543210\n");
    let (report, _) = run(file.path(), &headers_with_email(), 10).await;

    assert_eq!(report.invalid_count(), 1);
    let row = &report.invalid_rows[0];
    assert_eq!(row.row.get("phonenumber"), "9876543210");
    assert!(
        row.errors
            .contains(&"Email is required when email column exists".to_string())
    );
    assert!(row.errors.contains(&"Message is required".to_string()));
}

#[tokio::test]
async fn unsupported_extension_is_a_structural_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"phonenumber,var1\n9876543210,hi\n")
        .expect("write file");

    let result = validate_file(
        file.path(),
        &headers_without_email(),
        EngineOptions::default(),
        |_| {},
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn report_serializes_to_the_wire_shape() {
    let file = csv_file("phonenumber,var1\n9876543210,hi\n9876543210,yo\n");
    let (report, _) = run(file.path(), &headers_without_email(), 10).await;

    let value = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(
        value,
        json!({
            "valid_rows": [
                {"phonenumber": "9876543210", "var1": "hi"}
            ],
            "invalid_rows": [
                {
                    "row": {"phonenumber": "9876543210", "var1": "yo"},
                    "errors": ["Duplicate phone number (also in rows: 1)"],
                    "original_index": 2
                }
            ],
            "duplicates": [
                {"field": "phonenumber", "value": "+919876543210", "rows": [1, 2]}
            ]
        })
    );
}
