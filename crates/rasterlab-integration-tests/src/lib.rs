//! Cross-crate integration tests for the rasterlab engine.
//!
//! The scenarios live in `tests/`; this crate has no library code of
//! its own.
