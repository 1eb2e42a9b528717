//! Error types for the front end.
//!
//! This module defines the errors the parser accumulates. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a parse can fail
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
