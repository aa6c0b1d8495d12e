//! Console host for the counter screen
//!
//! Each stdin line is one button press: `+`/`inc`/`increment` or
//! `r`/`reset`/`0`. `q`, `quit` or `exit` closes the screen.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tally_core::{tally_debug, InputEvent, LogCategory, TallyConfig, TallyError};
use tally_widgets::CounterScreen;

#[derive(Debug, Parser)]
#[command(name = "console_counter", version, about = "Drive a counter screen from the terminal")]
struct Args {
    /// Configuration file (.ron or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated events to run before reading stdin, e.g. "+,+,reset"
    #[arg(short, long)]
    script: Option<String>,

    /// Only print the counter text
    #[arg(short, long)]
    quiet: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

/// What the host does after a line of input
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

fn handle_line(screen: &CounterScreen, line: &str, out: &mut impl Write) -> io::Result<Step> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Step::Continue);
    }
    if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Step::Quit);
    }

    match line.parse::<InputEvent>() {
        Ok(event) => {
            screen.dispatch(event);
            writeln!(out, "{}", screen.text())?;
        }
        Err(err @ TallyError::InvalidInput { .. }) => {
            eprintln!("{} (try '+', 'reset' or 'quit')", err);
        }
        Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err.to_string())),
    }
    Ok(Step::Continue)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TallyConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => TallyConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }

    tally_core::init_with(&config)?;
    tally_widgets::init()?;

    let screen = CounterScreen::with_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.quiet {
        writeln!(out, "Counter ready. '+' increments, 'reset' clears, 'quit' exits.")?;
    }
    writeln!(out, "{}", screen.text())?;

    if let Some(script) = &args.script {
        for command in script.split(',') {
            if handle_line(&screen, command, &mut out)? == Step::Quit {
                return Ok(());
            }
        }
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if handle_line(&screen, &line, &mut out)? == Step::Quit {
            break;
        }
    }

    tally_debug!(LogCategory::Core, value = screen.value(), "console host exiting");
    Ok(())
}
