//! Heuristics over raw license text.
//!
//! [`extractor`] — newline normalization and best-effort mining of copyright
//! notices out of unclassified license files.

pub mod extractor;
