//! Gradebook - a menu-driven student roster
//!
//! Core modules:
//! - `student`: validated Student entity and the Grade domain
//! - `roster`: insertion-ordered collection with high-water roll allocation
//! - `persistence`: JSON snapshot load/save
//! - `error`: unified error type for roster operations
//!
//! The interactive shell lives in `main.rs`; everything with an invariant
//! lives here.

pub mod error;
pub mod persistence;
pub mod roster;
pub mod student;

pub use error::RosterError;
pub use roster::Roster;
pub use student::{Grade, Student};

/// Application constants
pub mod consts {
    /// Snapshot file written next to the executable
    pub const DATA_FILE_NAME: &str = "students.json";
}
