//! Unified error type for roster operations
//!
//! One enum covers validation, lookup, and persistence failures so the shell
//! can render any outcome as a single-line message and return to the menu.

use thiserror::Error;

use crate::student::Grade;

/// Everything that can go wrong in a roster operation
#[derive(Debug, Error)]
pub enum RosterError {
    /// Name was empty after trimming
    #[error("Name cannot be empty.")]
    InvalidName,
    /// Roll number was zero (non-numeric and negative input is rejected at
    /// the shell before it reaches the entity)
    #[error("Roll number must be a positive integer.")]
    InvalidRollNumber,
    /// Grade was not a single whitelisted letter after normalization
    #[error("Grade must be one of: {}.", Grade::allowed_display())]
    InvalidGrade,
    /// No student carries the given roll number
    #[error("No student found with roll number {0}.")]
    NotFound(u32),
    /// Persistence read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
