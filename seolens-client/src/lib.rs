pub mod client;
pub mod error;
pub mod result;

pub use client::{AuditClient, validate_url};
pub use error::AuditError;
pub use result::AuditResult;
