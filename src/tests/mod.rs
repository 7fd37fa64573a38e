//! In-crate acceptance and rendering tests driven through the harness.
