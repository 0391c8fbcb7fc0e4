//! In-memory roster collection
//!
//! Insertion-ordered, unique roll numbers, high-water roll allocation. Every
//! operation either succeeds fully or leaves the roster untouched.

use crate::error::RosterError;
use crate::student::{Grade, Student};

/// The collection of all students known to the running session
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Rebuild from a persisted snapshot, preserving file order.
    ///
    /// A hand-edited snapshot can carry duplicate roll numbers; the first
    /// occurrence wins and later duplicates are dropped with a warning.
    pub fn from_students(students: Vec<Student>) -> Self {
        let mut roster = Self::new();
        for student in students {
            if roster.find_by_roll(student.roll_number()).is_some() {
                log::warn!(
                    "Dropping '{}': duplicate roll number {}",
                    student.name(),
                    student.roll_number()
                );
                continue;
            }
            roster.students.push(student);
        }
        roster
    }

    /// Next roll number to hand out: one past the highest on the roster.
    /// High-water allocation, never reuses a value.
    fn next_roll_number(&self) -> u32 {
        self.students
            .iter()
            .map(Student::roll_number)
            .max()
            .map_or(1, |highest| highest + 1)
    }

    /// Add a new student, allocating their roll number
    pub fn add(&mut self, name: &str, grade: &str) -> Result<&Student, RosterError> {
        let student = Student::new(name, self.next_roll_number(), grade)?;
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Read-only view in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Linear scan; roll uniqueness means at most one match
    pub fn find_by_roll(&self, roll_number: u32) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.roll_number() == roll_number)
    }

    /// Change a student's grade, returning (old, new) on success
    pub fn update_grade(
        &mut self,
        roll_number: u32,
        raw_grade: &str,
    ) -> Result<(Grade, Grade), RosterError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.roll_number() == roll_number)
            .ok_or(RosterError::NotFound(roll_number))?;
        let old = student.set_grade(raw_grade)?;
        Ok((old, student.grade()))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
