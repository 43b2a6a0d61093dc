// Interactive menu loop
//
// One line of input is read per iteration; every selected action runs to
// completion before the menu is shown again. Write failures follow the
// log-and-report-boolean policy of the `try_*` store methods, so a failed
// action never ends the session.

use crate::output;
use common::db::repositories::StudentStore;
use common::models::NewStudent;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const MENU: &str = "Main Menu:\n1. Get all students\n2. Add a student\n3. Update a student's email\n4. Delete a student\n5. Exit";

/// One parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    Add,
    UpdateEmail,
    Delete,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::ListAll,
            "2" => MenuChoice::Add,
            "3" => MenuChoice::UpdateEmail,
            "4" => MenuChoice::Delete,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

type InputLines = Lines<BufReader<Stdin>>;

/// Run the menu loop until the user exits or stdin closes
pub async fn run(store: &dyn StudentStore) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("{MENU}");
        print!("Enter a number: ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match MenuChoice::parse(&line) {
            MenuChoice::ListAll => list_students(store).await,
            MenuChoice::Add => add_student(store, &mut lines).await?,
            MenuChoice::UpdateEmail => update_student_email(store, &mut lines).await?,
            MenuChoice::Delete => delete_student(store, &mut lines).await?,
            MenuChoice::Exit => break,
            MenuChoice::Invalid => println!("Invalid input"),
        }
    }

    Ok(())
}

async fn list_students(store: &dyn StudentStore) {
    println!("\nPrinting all students...");
    match store.list_all().await {
        Ok(students) => println!("{}", output::render_students(&students)),
        Err(e) => println!("Error fetching students: {e}"),
    }
}

async fn add_student(store: &dyn StudentStore, lines: &mut InputLines) -> io::Result<()> {
    let first_name = prompt(lines, "First name: ").await?;
    let last_name = prompt(lines, "Last name: ").await?;
    let email = prompt(lines, "Email: ").await?;
    let enrollment_date = prompt(lines, "Enrollment date (YYYY-MM-DD): ").await?;

    let student = NewStudent {
        first_name,
        last_name,
        email,
        enrollment_date,
    };

    if store.try_add(&student).await {
        println!("Student inserted successfully");
    } else {
        println!("Student was not inserted");
    }
    Ok(())
}

async fn update_student_email(store: &dyn StudentStore, lines: &mut InputLines) -> io::Result<()> {
    let Some(student_id) = prompt_id(lines).await? else {
        return Ok(());
    };
    let email = prompt(lines, "New email: ").await?;

    if store.try_update_email(student_id, &email).await {
        println!("Student email updated successfully");
    } else {
        println!("Student email was not updated");
    }
    Ok(())
}

async fn delete_student(store: &dyn StudentStore, lines: &mut InputLines) -> io::Result<()> {
    let Some(student_id) = prompt_id(lines).await? else {
        return Ok(());
    };

    if store.try_delete(student_id).await {
        println!("Student deleted successfully");
    } else {
        println!("Student was not deleted");
    }
    Ok(())
}

async fn prompt(lines: &mut InputLines, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    match lines.next_line().await? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed mid-prompt",
        )),
    }
}

async fn prompt_id(lines: &mut InputLines) -> io::Result<Option<i32>> {
    let input = prompt(lines, "Student id: ").await?;
    match input.parse::<i32>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("Invalid student id");
            Ok(None)
        }
    }
}
