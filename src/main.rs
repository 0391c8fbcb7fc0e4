//! Gradebook entry point
//!
//! The interactive shell: prints the menu, reads and validates raw input,
//! dispatches to the roster, and persists after every successful mutation.
//! All invariants live in the library; this file is I/O only.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use gradebook::{Roster, persistence};

fn display_menu() {
    println!("\n{}", "=".repeat(50));
    println!("     STUDENT MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(50));
    println!("1. Add New Student");
    println!("2. View All Students");
    println!("3. Search for Student by Number");
    println!("4. Update Student Grade");
    println!("5. Log Out");
    println!("{}", "=".repeat(50));
}

/// Prompt and read one line, trimmed. `None` means stdin closed.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            log::warn!("Failed to read stdin: {err}");
            None
        }
    }
}

/// Parse a roll number typed at a prompt.
///
/// Distinct message per failure mode: empty, non-numeric, negative, zero,
/// out of range.
fn parse_roll_number(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Roll number cannot be empty!".to_string());
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| "Roll number must be a valid integer!".to_string())?;
    if value < 0 {
        return Err("Roll number cannot be negative!".to_string());
    }
    if value == 0 {
        return Err("Roll number must be a positive integer!".to_string());
    }
    u32::try_from(value).map_err(|_| "Roll number is too large!".to_string())
}

/// Persist after a successful mutation; failure warns but never rolls back
fn save_snapshot(path: &Path, roster: &Roster) {
    if let Err(err) = persistence::save(path, roster) {
        println!(
            "Warning: could not save roster to {}: {}",
            path.display(),
            err
        );
    }
}

fn add_new_student(roster: &mut Roster, data_path: &Path) -> Option<()> {
    println!("\n--- Add New Student ---");

    let name = read_line("Enter student's name: ")?;
    let grade = read_line("Enter grade: ")?;

    match roster.add(&name, &grade) {
        Ok(student) => {
            println!(
                "\n✓ Student '{}' (Roll Number: {}) added successfully!",
                student.name(),
                student.roll_number()
            );
            save_snapshot(data_path, roster);
        }
        Err(err) => println!("Error: {err}"),
    }
    Some(())
}

fn view_all_students(roster: &Roster) {
    println!("\n--- View All Students ---");

    if roster.is_empty() {
        println!("No students found in the system.");
        return;
    }

    println!("\nTotal Students: {}", roster.len());
    println!("{}", "-".repeat(50));
    for (i, student) in roster.students().iter().enumerate() {
        println!("{}. {}", i + 1, student);
    }
    println!("{}", "-".repeat(50));
}

fn search_student_by_number(roster: &Roster) -> Option<()> {
    println!("\n--- Search for Student by Number ---");

    if roster.is_empty() {
        println!("No students found in the system.");
        return Some(());
    }

    let raw = read_line("Enter roll number to search: ")?;
    let roll = match parse_roll_number(&raw) {
        Ok(roll) => roll,
        Err(msg) => {
            println!("Error: {msg}");
            return Some(());
        }
    };

    match roster.find_by_roll(roll) {
        Some(student) => {
            println!("\n✓ Student Found:");
            println!("   {student}");
        }
        None => println!("\n✗ No student found with roll number {roll}."),
    }
    Some(())
}

fn update_student_grade(roster: &mut Roster, data_path: &Path) -> Option<()> {
    println!("\n--- Update Student Grade ---");

    if roster.is_empty() {
        println!("No students found in the system.");
        return Some(());
    }

    let raw = read_line("Enter roll number to update: ")?;
    let roll = match parse_roll_number(&raw) {
        Ok(roll) => roll,
        Err(msg) => {
            println!("Error: {msg}");
            return Some(());
        }
    };

    match roster.find_by_roll(roll) {
        Some(student) => {
            println!("\nCurrent student information:");
            println!("   {student}");
        }
        None => {
            println!("\n✗ No student found with roll number {roll}.");
            return Some(());
        }
    }

    let new_grade = read_line("\nEnter new grade: ")?;
    match roster.update_grade(roll, &new_grade) {
        Ok((old, new)) => {
            println!("\n✓ Grade updated successfully!");
            println!("   Roll Number {roll}: {old} → {new}");
            save_snapshot(data_path, roster);
        }
        Err(err) => println!("Error: {err}"),
    }
    Some(())
}

fn farewell() {
    println!("\nThank you for using the Student Management System!");
    println!("Goodbye!");
}

fn main() {
    env_logger::init();

    // Every mutation is persisted immediately, so the interrupt path only
    // needs to say goodbye; there is no state to flush.
    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n\nProgram interrupted by user.");
        println!("Thank you for using the Student Management System!");
        process::exit(0);
    }) {
        log::warn!("Could not install Ctrl-C handler: {err}");
    }

    let data_path = persistence::data_file_path();
    let mut roster = persistence::load(&data_path);

    println!("Welcome to the Student Management System!");
    if !roster.is_empty() {
        println!(
            "Loaded {} student(s) from {}.",
            roster.len(),
            data_path.display()
        );
    }

    loop {
        display_menu();

        let Some(choice) = read_line("\nEnter your choice (1-5): ") else {
            break;
        };
        let outcome = match choice.as_str() {
            "1" => add_new_student(&mut roster, &data_path),
            "2" => {
                view_all_students(&roster);
                Some(())
            }
            "3" => search_student_by_number(&roster),
            "4" => update_student_grade(&mut roster, &data_path),
            "5" => {
                farewell();
                return;
            }
            _ => {
                println!("\n✗ Invalid choice! Please enter a number between 1 and 5.");
                Some(())
            }
        };
        // None means stdin closed mid-action; treat like an interrupt
        if outcome.is_none() {
            break;
        }
    }

    farewell();
}
