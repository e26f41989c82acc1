use crate::infra::standard_engine;
use crate::session::{write_rooms, write_students};
use clap::Args;
use hostel::allocation::AllocationEngine;
use hostel::error::AppError;
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the final roster view as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

enum DemoStep {
    Add { name: &'static str, id: &'static str },
    Assign { student_id: &'static str, room_number: &'static str },
}

struct Scenario {
    title: &'static str,
    steps: Vec<DemoStep>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Register Alice",
            steps: vec![DemoStep::Add {
                name: "Alice",
                id: "GH001",
            }],
        },
        Scenario {
            title: "Register Bob under Alice's id",
            steps: vec![DemoStep::Add {
                name: "Bob",
                id: "GH001",
            }],
        },
        Scenario {
            title: "Assign Alice to room 101",
            steps: vec![DemoStep::Assign {
                student_id: "GH001",
                room_number: "101",
            }],
        },
        Scenario {
            title: "Fill room 103, then try a third student",
            steps: vec![
                DemoStep::Add {
                    name: "Bea",
                    id: "GH002",
                },
                DemoStep::Add {
                    name: "Cara",
                    id: "GH003",
                },
                DemoStep::Add {
                    name: "Dina",
                    id: "GH004",
                },
                DemoStep::Assign {
                    student_id: "GH002",
                    room_number: "103",
                },
                DemoStep::Assign {
                    student_id: "GH003",
                    room_number: "103",
                },
                DemoStep::Assign {
                    student_id: "GH004",
                    room_number: "103",
                },
            ],
        },
        Scenario {
            title: "Move Alice from room 101 to room 102",
            steps: vec![DemoStep::Assign {
                student_id: "GH001",
                room_number: "102",
            }],
        },
        Scenario {
            title: "Submit the assignment form without a student",
            steps: vec![DemoStep::Assign {
                student_id: "",
                room_number: "101",
            }],
        },
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = standard_engine()?;
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "Hostel allocation demo")?;
    play_scenarios(&engine, &mut output, !args.json)?;

    if args.json {
        let view = engine.snapshot().view();
        let rendered = serde_json::to_string_pretty(&view)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        writeln!(output, "{rendered}")?;
    }

    Ok(())
}

fn play_scenarios<W: Write>(
    engine: &AllocationEngine,
    output: &mut W,
    show_roster: bool,
) -> io::Result<()> {
    for (index, scenario) in scenarios().into_iter().enumerate() {
        writeln!(output, "\n{}. {}", index + 1, scenario.title)?;
        for step in scenario.steps {
            let (action, result) = match step {
                DemoStep::Add { name, id } => (
                    format!("add {name} ({id})"),
                    engine.add_student(name, id).map_err(|err| err.to_string()),
                ),
                DemoStep::Assign {
                    student_id,
                    room_number,
                } => (
                    format!("assign '{student_id}' -> room {room_number}"),
                    engine
                        .assign_room(student_id, room_number)
                        .map_err(|err| err.to_string()),
                ),
            };
            match result {
                Ok(()) => writeln!(output, "  {action}: ok")?,
                Err(message) => writeln!(output, "  {action}: rejected ({message})")?,
            }
        }
    }

    if show_roster {
        let roster = engine.snapshot();
        writeln!(output)?;
        write_students(output, &roster)?;
        writeln!(output)?;
        write_rooms(output, &roster)?;
    }

    Ok(())
}
