//! Format-detecting syslog normalization.
//!
//! Given a static batch of raw log lines, this crate detects which of a
//! closed set of syslog grammars governs the batch, then decodes every
//! line against that single grammar into named-field records.
//!
//! # Architecture
//!
//! - `model.rs`: record, result, and error types
//! - `registry.rs`: the ordered, immutable grammar catalog
//! - `formats/`: one module per grammar (pattern, fields, decode)
//! - `decoder.rs`: batch detection and per-line decoding
//! - `priority.rs`: PRI value → facility/severity names
//! - `timestamp.rs`: per-grammar timestamp parsing
//!
//! # Guarantees
//!
//! - Deterministic: no clock, no randomness, no I/O
//! - A malformed line degrades to "unparsed", never aborts the batch
//! - The registry is read-only after construction and shareable across
//!   threads without locking

pub mod decoder;
pub mod formats;
pub mod model;
pub mod priority;
pub mod registry;
pub mod timestamp;
mod serde_utils;

// Re-export commonly used types
pub use decoder::{decode, detect};
pub use model::{DecodeError, DecodeResult, GrammarKind, Record};
pub use registry::{FormatRegistry, GrammarSpec};

/// Lines sampled from the head of a batch during format detection.
pub const DETECTION_SAMPLE_SIZE: usize = 5;
