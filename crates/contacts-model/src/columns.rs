//! Destination schema column names.
//!
//! The upload wizard maps arbitrary source columns onto this fixed set;
//! everything downstream (schema rules, duplicate keys, the sample template)
//! refers to columns by these names.

/// Phone number column. Always required.
pub const PHONE: &str = "phonenumber";

/// Email column. Optional; when present in a file its values are validated.
pub const EMAIL: &str = "email";

/// Primary message column. Required, capped at 160 characters.
pub const MESSAGE: &str = "var1";

/// Second free-text column. Optional, unconstrained.
pub const VAR2: &str = "var2";

/// Third free-text column. Optional, unconstrained.
pub const VAR3: &str = "var3";

/// Column order used by the downloadable sample template.
pub const TEMPLATE_HEADERS: [&str; 5] = [PHONE, EMAIL, MESSAGE, VAR2, VAR3];
