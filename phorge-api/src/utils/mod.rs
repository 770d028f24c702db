//! Utility modules.

/// Timestamp deserialization helpers shared by the models.
pub mod datetime;

/// Log sanitization utilities to keep secrets out of debug logs.
pub mod log_sanitizer;
