//! Error types for the lexer.
//!
//! - Error variants carrying source position information
//! - Accessors used when rendering diagnostics

pub mod errors;
