use crate::infra::standard_engine;
use hostel::allocation::{AllocationEngine, RosterSnapshot, EMPTY_STUDENT_LIST};
use hostel::config::AppConfig;
use hostel::error::AppError;
use hostel::telemetry;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add <student-id> <name...>     register a student
  assign <student-id> <room>     assign or move a student to a room
  students                       list all students
  rooms                          show room occupancy
  options                        show the selectable students and rooms
  help                           show this message
  quit                           end the session";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Add { id: &'a str, name: &'a str },
    Assign { student_id: &'a str, room_number: &'a str },
    Students,
    Rooms,
    Options,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> SessionCommand<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let (id, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                SessionCommand::Add {
                    id,
                    name: name.trim_start(),
                }
            }
            "assign" => {
                let mut parts = rest.split_whitespace();
                SessionCommand::Assign {
                    student_id: parts.next().unwrap_or_default(),
                    room_number: parts.next().unwrap_or_default(),
                }
            }
            "students" => SessionCommand::Students,
            "rooms" => SessionCommand::Rooms,
            "options" => SessionCommand::Options,
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(verb),
        };
        Some(command)
    }
}

pub(crate) fn run_session() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = standard_engine()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    drive_session(&engine, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Reads one command per line until `quit` or end of input.
fn drive_session<R: BufRead, W: Write>(
    engine: &AllocationEngine,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Girls Hostel Management System")?;
    writeln!(output, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = SessionCommand::parse(&line) else {
            continue;
        };

        match command {
            SessionCommand::Add { id, name } => match engine.add_student(name, id) {
                Ok(()) => writeln!(output, "Added {name} ({id}).")?,
                Err(err) => writeln!(output, "{err}")?,
            },
            SessionCommand::Assign {
                student_id,
                room_number,
            } => match engine.assign_room(student_id, room_number) {
                Ok(()) => writeln!(output, "Assigned {student_id} to room {room_number}.")?,
                Err(err) => writeln!(output, "{err}")?,
            },
            SessionCommand::Students => write_students(&mut output, &engine.snapshot())?,
            SessionCommand::Rooms => write_rooms(&mut output, &engine.snapshot())?,
            SessionCommand::Options => write_options(&mut output, &engine.snapshot())?,
            SessionCommand::Help => writeln!(output, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(verb) => {
                writeln!(output, "Unknown command '{verb}'. Type 'help' for commands.")?
            }
        }
    }

    output.flush()
}

pub(crate) fn write_students<W: Write>(output: &mut W, roster: &RosterSnapshot) -> io::Result<()> {
    writeln!(output, "All Students")?;
    let students = roster.student_list();
    if students.is_empty() {
        return writeln!(output, "- {EMPTY_STUDENT_LIST}");
    }
    for student in students {
        writeln!(
            output,
            "- {} ({}) | {}",
            student.name, student.id, student.assignment_label
        )?;
    }
    Ok(())
}

pub(crate) fn write_rooms<W: Write>(output: &mut W, roster: &RosterSnapshot) -> io::Result<()> {
    writeln!(output, "Rooms Overview")?;
    for room in roster.room_overview() {
        let marker = if room.full { " [full]" } else { "" };
        writeln!(
            output,
            "- Room {} | {}{}",
            room.number, room.occupancy_label, marker
        )?;
    }
    Ok(())
}

fn write_options<W: Write>(output: &mut W, roster: &RosterSnapshot) -> io::Result<()> {
    writeln!(output, "Select Student")?;
    for option in roster.student_options() {
        writeln!(output, "- {}", option.label)?;
    }
    writeln!(output, "Select Room")?;
    for option in roster.room_options() {
        let marker = if option.disabled { " (unavailable)" } else { "" };
        writeln!(output, "- {}{}", option.label, marker)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, std::sync::Arc<AllocationEngine>) {
        let engine = standard_engine().expect("standard layout seeds");
        let mut output = Vec::new();
        drive_session(&engine, Cursor::new(script.as_bytes()), &mut output)
            .expect("session runs");
        (String::from_utf8(output).expect("utf-8 output"), engine)
    }

    #[test]
    fn parses_names_with_spaces() {
        assert_eq!(
            SessionCommand::parse("add GH001 Alice  Smith"),
            Some(SessionCommand::Add {
                id: "GH001",
                name: "Alice  Smith"
            })
        );
        assert_eq!(
            SessionCommand::parse("ASSIGN GH001"),
            Some(SessionCommand::Assign {
                student_id: "GH001",
                room_number: ""
            })
        );
        assert_eq!(SessionCommand::parse("   "), None);
    }

    #[test]
    fn session_registers_and_assigns() {
        let (output, engine) = run_script("add GH001 Alice\nassign GH001 101\nrooms\nquit\n");

        assert!(output.contains("Added Alice (GH001)."));
        assert!(output.contains("Assigned GH001 to room 101."));
        assert!(output.contains("- Room 101 | Occupancy: 1 / 2 (Alice)"));
        assert_eq!(engine.snapshot().revision(), 2);
    }

    #[test]
    fn session_prints_rejections_verbatim() {
        let (output, _) = run_script("add GH001\nassign GH001\nadd GH001 Alice\nadd GH001 Bob\n");

        assert!(output.contains("Student Name and ID cannot be empty."));
        assert!(output.contains("Please select both a student and a room."));
        assert!(output.contains("Student with this ID already exists."));
    }

    #[test]
    fn session_stops_at_quit() {
        let (output, engine) = run_script("quit\nadd GH001 Alice\n");

        assert!(!output.contains("Added"));
        assert!(engine.snapshot().students().is_empty());
    }

    #[test]
    fn exit_is_an_alias_for_quit() {
        assert_eq!(SessionCommand::parse("Exit"), Some(SessionCommand::Quit));

        let (_, engine) = run_script("exit\nadd GH001 Alice\n");
        assert!(engine.snapshot().students().is_empty());
    }

    #[test]
    fn empty_student_list_shows_placeholder() {
        let (output, _) = run_script("students\nfly\n");

        assert!(output.contains("- No students registered yet."));
        assert!(output.contains("Unknown command 'fly'."));
    }

    #[test]
    fn options_mark_full_rooms() {
        let (output, _) = run_script(
            "add GH001 Alice\nadd GH002 Bea\nassign GH001 103\nassign GH002 103\noptions\n",
        );

        assert!(output.contains("- Alice (GH001) (Currently in 103)"));
        assert!(output.contains("- Room 103 (Capacity: 2, Occupied: 2) (Full) (unavailable)"));
    }
}
