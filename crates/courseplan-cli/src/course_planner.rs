//! Interactive course planner
//!
//! Usage: course_planner [options]
//!
//! Options:
//!   --file <PATH>        Load courses from PATH before showing the menu
//!   --separator <CHAR>   Field separator (default: ',')
//!   --skip-header        Do not treat the first line as a course
//!   --help, -h           Show help
//!
//! Logging is written to stderr and filtered with RUST_LOG (default: warn).
//!
//! Example:
//!   course_planner --file ABCU_Advising_Program_Input.csv
//!   Enter choice: 2

use courseplan_core::constants::{
    CHOICE_EXIT, CHOICE_LOAD, CHOICE_PRINT, CHOICE_SEARCH, DEFAULT_SEPARATOR,
};
use courseplan_core::{Command, CoursePlanner, HeaderRow, Outcome, PlannerOptions};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Args {
    file: Option<PathBuf>,
    separator: char,
    header_row: HeaderRow,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --file <PATH>        Load courses from PATH before showing the menu");
    eprintln!("  --separator <CHAR>   Field separator (default: '{}')", DEFAULT_SEPARATOR);
    eprintln!("  --skip-header        Do not treat the first line as a course");
    eprintln!("  --help, -h           Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut file: Option<PathBuf> = None;
    let mut separator = DEFAULT_SEPARATOR;
    let mut header_row = HeaderRow::Include;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                i += 1;
                let value = args.get(i).ok_or("--file requires a value")?;
                file = Some(PathBuf::from(value));
            }
            "--separator" => {
                i += 1;
                let value = args.get(i).ok_or("--separator requires a value")?;
                let mut chars = value.chars();
                separator = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(format!("Separator must be a single character: {}", value)),
                };
            }
            "--skip-header" => header_row = HeaderRow::Skip,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        file,
        separator,
        header_row,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn print_menu() {
    println!("Welcome to the course planner.");
    println!("  {}. Load Courses", CHOICE_LOAD);
    println!("  {}. Print Course List", CHOICE_PRINT);
    println!("  {}. Search for a Course", CHOICE_SEARCH);
    println!("  {}. Exit", CHOICE_EXIT);
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            None
        }
    }
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Loaded { count } => println!("{} courses read", count),
        Outcome::CourseList(courses) => {
            for course in courses {
                println!("{}", course);
            }
            println!();
        }
        Outcome::Found(courses) => {
            for course in courses {
                println!("{}", course);
                println!("Prerequisites: {}", course.prereq_list());
            }
        }
        Outcome::NotFound { .. } => println!("Course not found."),
        Outcome::Invalid(choice) => println!("{} is not a valid option.", choice),
        Outcome::Exit => println!("Thank you for using the course planner!"),
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    init_tracing();

    let options = PlannerOptions::default()
        .with_separator(args.separator)
        .with_header_row(args.header_row);
    let mut planner = CoursePlanner::new(options);

    if let Some(path) = args.file {
        println!("Loading CSV file {}", path.display());
        render(&planner.dispatch(Command::Load { path }));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(line) = prompt(&mut input, "Enter choice: ") else {
            render(&Outcome::Exit);
            break;
        };

        let choice: i32 = match line.parse() {
            Ok(v) => v,
            Err(_) => {
                println!("{} is not a valid option.", line);
                continue;
            }
        };

        let argument = if Command::needs_argument(choice) {
            let message = if choice == CHOICE_LOAD {
                "Enter filename for course data: "
            } else {
                "What course do you want to know about? "
            };
            match prompt(&mut input, message) {
                Some(value) => value,
                None => {
                    render(&Outcome::Exit);
                    break;
                }
            }
        } else {
            String::new()
        };

        let command = Command::from_choice(choice, &argument);
        if let Command::Load { path } = &command {
            println!("Loading CSV file {}", path.display());
        }

        let outcome = planner.dispatch(command);
        render(&outcome);

        if outcome == Outcome::Exit {
            break;
        }
    }
}
