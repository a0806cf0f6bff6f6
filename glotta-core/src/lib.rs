//! Character n-gram models for natural language identification.
//!
//! This crate builds the statistics a language detector consumes:
//! - Training models: absolute and conditional frequencies of n-grams of
//!   orders 1 to 5, learned from one corpus per language
//! - Test models: the distinct n-grams of an unknown text, each with its
//!   back-off chain of shorter prefixes
//! - Parallel training across languages, with models persisted to disk
//!
//! Only the model API is exposed publicly. File handling stays internal.

/// N-gram values, alphabets, frequency tables and model builders.
pub mod model;

/// I/O utilities (corpus loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
