//! Entry points built on top of the artifacts
//!
//! - `diff_service`: Facade used by callers that store and replay diffs
//! - `session`: CLI session owning the output writer

pub mod diff_service;
pub mod session;
