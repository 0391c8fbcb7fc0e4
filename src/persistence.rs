//! Roster snapshot persistence
//!
//! One JSON file holds the whole roster and is rewritten after every
//! successful mutation. Reading is forgiving: a missing file means an empty
//! roster, a corrupt file degrades to an empty roster with a warning, and
//! individually malformed records are skipped so the rest still load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::RosterError;
use crate::roster::Roster;
use crate::student::Student;

/// Raw on-disk form of a student; validated when promoted to `Student`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub roll_number: u32,
    pub grade: String,
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            roll_number: student.roll_number(),
            grade: student.grade().to_string(),
        }
    }
}

/// Snapshot path: `students.json` next to the executable, or the working
/// directory when the executable path cannot be resolved.
pub fn data_file_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .map(|dir| dir.join(crate::consts::DATA_FILE_NAME))
        })
        .unwrap_or_else(|| PathBuf::from(crate::consts::DATA_FILE_NAME))
}

/// Load a roster from `path`, preserving file order.
///
/// Never fails: every problem is logged and the remaining records (possibly
/// none) become the roster. The user can always rebuild by re-adding.
pub fn load(path: &Path) -> Roster {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("No roster file at {}, starting empty", path.display());
            return Roster::new();
        }
        Err(err) => {
            log::warn!("Could not read {}: {}", path.display(), err);
            return Roster::new();
        }
    };

    let raw: Vec<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(values) => values,
        Err(err) => {
            log::warn!(
                "Roster file {} is corrupt ({}), starting empty",
                path.display(),
                err
            );
            return Roster::new();
        }
    };

    let mut students = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        // Two failure layers per record: wrong shape, then invalid fields
        let record: StudentRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                log::warn!("Skipping malformed record {index}: {err}");
                continue;
            }
        };
        match Student::new(&record.name, record.roll_number, &record.grade) {
            Ok(student) => students.push(student),
            Err(err) => log::warn!("Skipping invalid record {index} ({}): {err}", record.name),
        }
    }

    let roster = Roster::from_students(students);
    log::info!("Loaded {} student(s) from {}", roster.len(), path.display());
    roster
}

/// Write the whole roster to `path` as indented JSON
pub fn save(path: &Path, roster: &Roster) -> Result<(), RosterError> {
    let records: Vec<StudentRecord> = roster.students().iter().map(StudentRecord::from).collect();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer).map_err(io::Error::from)?;
    buf.push(b'\n');

    fs::write(path, &buf)?;
    log::info!(
        "Saved {} student(s) to {}",
        roster.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn snapshot_triples(roster: &Roster) -> Vec<(String, u32, char)> {
        roster
            .students()
            .iter()
            .map(|s| (s.name().to_string(), s.roll_number(), s.grade().as_char()))
            .collect()
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");

        let mut roster = Roster::new();
        roster.add("Alice", "A").unwrap();
        roster.add("Bob", "B").unwrap();
        save(&path, &roster).unwrap();

        let reloaded = load(&path);
        assert_eq!(snapshot_triples(&reloaded), snapshot_triples(&roster));
    }

    #[test]
    fn test_missing_file_yields_empty_roster() {
        let dir = tempdir().unwrap();
        let roster = load(&dir.path().join("nope.json"));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_empty_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(&path, "{not json").unwrap();

        let mut roster = load(&path);
        assert!(roster.is_empty());
        // The session keeps working; the next add starts from roll 1
        let student = roster.add("Alice", "A").unwrap();
        assert_eq!(student.roll_number(), 1);
    }

    #[test]
    fn test_malformed_records_skipped_individually() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(
            &path,
            r#"[
                {"name": "Alice", "roll_number": 1, "grade": "A"},
                {"name": "NoGrade", "roll_number": 2},
                {"name": "BadRoll", "roll_number": -3, "grade": "B"},
                {"name": "", "roll_number": 4, "grade": "C"},
                {"name": "BadGrade", "roll_number": 5, "grade": "G"},
                {"name": "Frank", "roll_number": 6, "grade": "F"}
            ]"#,
        )
        .unwrap();

        let roster = load(&path);
        assert_eq!(
            snapshot_triples(&roster),
            vec![
                ("Alice".to_string(), 1, 'A'),
                ("Frank".to_string(), 6, 'F'),
            ]
        );
    }

    #[test]
    fn test_compact_input_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(
            &path,
            r#"[{"name":"X","roll_number":1,"grade":"A"},{"name":"Y","roll_number":5,"grade":"B"}]"#,
        )
        .unwrap();

        let mut roster = load(&path);
        assert_eq!(roster.len(), 2);
        // High-water allocation continues past the preloaded rolls
        let z = roster.add("Z", "C").unwrap();
        assert_eq!(z.roll_number(), 6);
    }

    #[test]
    fn test_duplicate_rolls_deduplicated_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(
            &path,
            r#"[
                {"name": "First", "roll_number": 1, "grade": "A"},
                {"name": "Shadow", "roll_number": 1, "grade": "B"}
            ]"#,
        )
        .unwrap();

        let roster = load(&path);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find_by_roll(1).unwrap().name(), "First");
    }

    #[test]
    fn test_save_into_missing_directory_reports_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("students.json");

        let mut roster = Roster::new();
        roster.add("Alice", "A").unwrap();

        let result = save(&path, &roster);
        assert!(matches!(result, Err(RosterError::Io(_))));
    }

    #[test]
    fn test_output_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");

        let mut roster = Roster::new();
        roster.add("Alice", "A").unwrap();
        save(&path, &roster).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("    {"));
        assert!(text.contains("        \"name\": \"Alice\""));
        assert!(text.ends_with('\n'));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_triples(
            entries in proptest::collection::vec(
                ("[a-zA-Z]{1,12}", proptest::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'F'])),
                0..20,
            )
        ) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("students.json");

            let mut roster = Roster::new();
            for (name, grade) in &entries {
                roster.add(name, &grade.to_string()).unwrap();
            }
            save(&path, &roster).unwrap();

            let reloaded = load(&path);
            prop_assert_eq!(snapshot_triples(&reloaded), snapshot_triples(&roster));
        }
    }
}
