//! Library components for the contacts CLI.

pub mod logging;
