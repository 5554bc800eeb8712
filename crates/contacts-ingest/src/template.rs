//! Downloadable sample template.
//!
//! The artifact is fixed; external tooling compares it byte for byte.

use std::io::{self, Write};

/// Exact contents of the sample CSV template. Newline-joined with no
/// trailing newline after the last row.
pub const SAMPLE_TEMPLATE: &str = "\
phonenumber,email,var1,var2,var3
+919876543210,example@domain.com,Sample message 1,Sample message 2,Optional 2
+911234567890,test@test.com,Sample message 2,,";

/// Suggested file name for the exported template.
pub const SAMPLE_TEMPLATE_FILENAME: &str = "sample_contacts.csv";

/// Write the sample template to `writer`.
pub fn write_sample_template<W: Write>(writer: &mut W) -> io::Result<()> {
    writer.write_all(SAMPLE_TEMPLATE.as_bytes())
}
