//! Student entity and the grade domain
//!
//! All field validation lives here. The shell and the persistence adapter
//! both funnel raw input through `Grade::parse` and `Student::new`; neither
//! carries its own copy of the rules.

use std::fmt;

use crate::error::RosterError;

/// Letter grade, the closed set the system accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Every accepted grade, in display order
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    /// The one normalization rule: trim surrounding whitespace, uppercase
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Parse a raw grade string (normalize, then whitelist check)
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        match Self::normalize(raw).as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            _ => Err(RosterError::InvalidGrade),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
            Grade::F => 'F',
        }
    }

    /// Comma-separated whitelist for prompts and diagnostics
    pub fn allowed_display() -> String {
        let letters: Vec<String> = Self::ALL.iter().map(|g| g.as_char().to_string()).collect();
        letters.join(", ")
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A student on the roster
///
/// Fields are validated at construction and immutable afterwards, except the
/// grade, which changes only through `set_grade`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    roll_number: u32,
    grade: Grade,
}

impl Student {
    /// Validate and construct. Checks run in field order: name, roll, grade.
    pub fn new(name: &str, roll_number: u32, grade: &str) -> Result<Self, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::InvalidName);
        }
        if roll_number == 0 {
            return Err(RosterError::InvalidRollNumber);
        }
        let grade = Grade::parse(grade)?;
        Ok(Self {
            name: name.to_string(),
            roll_number,
            grade,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> u32 {
        self.roll_number
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Replace the grade. On failure the prior grade is retained; on success
    /// the prior grade is returned for the shell's old/new report.
    pub fn set_grade(&mut self, raw: &str) -> Result<Grade, RosterError> {
        let new = Grade::parse(raw)?;
        let old = self.grade;
        self.grade = new;
        Ok(old)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Roll Number: {}, Grade: {}",
            self.name, self.roll_number, self.grade
        )
    }
}
