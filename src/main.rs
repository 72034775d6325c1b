use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::{Calculator, copy_to_clipboard, text_for_clipboard};
use zcalc::config::Config;
use zcalc::input::{Command, command_for_key, dispatch, parse_clicks, parse_key_sequence};

type Screen = Calculator<String, String>;

/// A keyboard-driven calculator.
///
/// Each SCRIPT is a sequence of keys: characters are pressed one by one,
/// `<Enter>`, `<Backspace>` and `<Escape>` press named keys, and `<S-=>`
/// presses `=` with shift. Without scripts, key lines are read from stdin.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Path to the config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the calculator state as JSON instead of the history and display lines.
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Treat scripts as button clicks (`num:7 op:plus action:equals`).
    #[arg(long)]
    click: bool,

    /// Key (or click) scripts to feed in order.
    scripts: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut calculator = Calculator::with_settings(
        String::new(),
        String::new(),
        config.display,
        config.rounding.decimals,
    );

    if cli.scripts.is_empty() {
        run_interactive(&mut calculator, &cli)?;
    } else {
        for script in &cli.scripts {
            feed(&mut calculator, script, cli.click)
                .with_context(|| format!("Invalid script `{}`", script))?;
        }
        print_screen(&calculator, cli.json)?;
    }

    if cli.copy || config.copy_result {
        let snapshot = calculator.snapshot();
        copy_to_clipboard(text_for_clipboard(&snapshot)).context("Failed to copy result")?;
    }

    Ok(())
}

/// Read scripts from stdin line by line, printing the screen after each one.
fn run_interactive(calculator: &mut Screen, cli: &Cli) -> Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if let Err(e) = feed(calculator, &line, cli.click) {
            eprintln!("zcalc: {}", e);
            continue;
        }
        print_screen(calculator, cli.json)?;
    }

    Ok(())
}

/// Parse a script and apply each resulting command.
fn feed(calculator: &mut Screen, script: &str, click: bool) -> Result<()> {
    let commands: Vec<Command> = if click {
        parse_clicks(script)?
            .into_iter()
            .map(|button| button.command())
            .collect()
    } else {
        parse_key_sequence(script)?
            .iter()
            .filter_map(|press| {
                let command = command_for_key(press);
                if command.is_none() {
                    tracing::debug!(key = %press.key, "Ignoring unbound key");
                }
                command
            })
            .collect()
    };

    for command in commands {
        dispatch(calculator, command);
    }

    Ok(())
}

fn print_screen(calculator: &Screen, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if json {
        let snapshot = serde_json::to_string(&calculator.snapshot())?;
        writeln!(stdout, "{}", snapshot)?;
    } else {
        writeln!(stdout, "{}", calculator.history())?;
        writeln!(stdout, "{}", calculator.display())?;
    }

    Ok(())
}
