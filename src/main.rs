use std::{
    fs,
    io::{self, Write},
};

use clap::Parser;
use cxcalc::{
    error::Diagnostic,
    interpreter::{
        parser::table::render_table,
        session::{Outcome, Session},
    },
    read_source_line, run_script,
};

/// cxcalc evaluates assignments and print statements over real and complex
/// numbers, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells cxcalc to read SCRIPT as a file path instead of source text.
    #[arg(short, long)]
    file: bool,

    /// Prints the grammar productions and the precedence table, then exits.
    #[arg(short, long)]
    table: bool,

    /// Source text (or a path with --file). Starts an interactive session when
    /// omitted.
    script: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.table {
        print!("{}", render_table());
        return;
    }

    match args.script {
        Some(script) => {
            let source = if args.file {
                fs::read(&script).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                                 .unwrap_or_else(|_| {
                                     eprintln!("Failed to read the input file '{script}'. Perhaps this file does not exist?");
                                     std::process::exit(1);
                                 })
            } else {
                script
            };
            run_batch(&source);
        },
        None => {
            if let Err(e) = run_interactive() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}

fn run_batch(source: &str) {
    let mut session = Session::new();

    for report in run_script(source, &mut session) {
        report_diagnostics(&report.diagnostics);
        match report.result {
            Ok(outcome) => report_outcome(&outcome, false),
            Err(e) => eprintln!("Error on line {}: {e}", report.line),
        }
    }
}

fn run_interactive() -> io::Result<()> {
    let mut session = Session::interactive();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    println!("Interactive interpreter mode. Type 'exit' to exit.");

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = read_source_line(&mut stdin)? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let result = session.execute(&line);
        report_diagnostics(&session.take_diagnostics());
        match result {
            Ok(outcome) => report_outcome(&outcome, session.is_interactive()),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    Ok(())
}

fn report_outcome(outcome: &Outcome, echo_assignments: bool) {
    match outcome {
        Outcome::Printed(value) => println!("Result: {value}"),
        Outcome::Assigned { name, value } if echo_assignments => println!("{name} = {value}"),
        Outcome::Assigned { .. } | Outcome::Empty => {},
    }
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("Warning: {diagnostic}");
    }
}
