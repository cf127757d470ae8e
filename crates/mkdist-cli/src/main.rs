use std::str::FromStr;

use atty::Stream;
use clap::{ArgAction, Parser};
use color_eyre::{eyre::eyre, Result};
use mkdist_core::{
    execute, format_status_message, to_json_response, CommandStatus, ExecutionOutcome,
    GlobalOptions, Target,
};
use serde_json::Value;

mod style;

use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = MkdistCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let global = GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
        json: cli.json,
    };
    let target = cli.target.unwrap_or(Target::Help);

    let outcome = execute(&global, target).map_err(|err| eyre!("{err:?}"))?;
    let code = emit_output(&cli, target, &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Make-style packaging chores for Python distributions",
    long_about = "mkdist drives the Python packaging toolchain through a fixed target table: \
build, clean, install, and rebuild, plus a help target listing them all. Run it with no \
target to see the table.",
    after_help = "Examples:\n  mkdist            # list available targets\n  mkdist build      # write sdist + wheel into dist/\n  mkdist --json install\n  MKDIST_PYTHON=/usr/bin/python3 mkdist rebuild"
)]
struct MkdistCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)"
    )]
    quiet: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    verbose: u8,

    #[arg(long, help = "Force trace logging regardless of -v/-q")]
    trace: bool,

    #[arg(long, help = "Emit {status,message,details} JSON envelopes")]
    json: bool,

    #[arg(long, help = "Disable colored human output")]
    no_color: bool,

    #[arg(
        value_name = "TARGET",
        value_parser = Target::from_str,
        help = "Target to run (defaults to help)"
    )]
    target: Option<Target>,
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("mkdist_cli={level},mkdist_core={level},mkdist_domain={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn emit_output(cli: &MkdistCli, target: Target, outcome: &ExecutionOutcome) -> Result<i32> {
    let code = exit_code(outcome);

    let style = Style::new(cli.no_color, atty::is(Stream::Stdout));

    if cli.json {
        let payload = to_json_response(target, outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if !cli.quiet {
        let message = format_status_message(target, &outcome.message);
        println!("{}", style.status(&outcome.status, &message));
        if let Some(hint) = hint_from_details(&outcome.details) {
            let hint_line = format!("Hint: {hint}");
            println!("{}", style.info(&hint_line));
        }
        if let Some(table) = render_target_table(&outcome.details) {
            println!("{table}");
        }
    }

    Ok(code)
}

fn exit_code(outcome: &ExecutionOutcome) -> i32 {
    match outcome.status {
        CommandStatus::Ok => 0,
        CommandStatus::UserError => 1,
        CommandStatus::Failure => failure_exit_code(&outcome.details),
    }
}

/// Propagates the underlying tool's exit code when the outcome recorded one.
fn failure_exit_code(details: &Value) -> i32 {
    details
        .get("code")
        .and_then(Value::as_i64)
        .and_then(|code| i32::try_from(code).ok())
        .filter(|code| *code > 0)
        .unwrap_or(2)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}

fn render_target_table(details: &Value) -> Option<String> {
    let targets = details.get("targets")?.as_array()?;
    if targets.is_empty() {
        return None;
    }

    let mut rows = Vec::new();
    for target in targets {
        let obj = target.as_object()?;
        rows.push(TargetRow {
            name: obj.get("name")?.as_str()?.to_string(),
            summary: obj.get("summary")?.as_str()?.to_string(),
        });
    }

    Some(format_target_table(&rows))
}

struct TargetRow {
    name: String,
    summary: String,
}

fn format_target_table(rows: &[TargetRow]) -> String {
    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|row| format!("{:<width$}  {}", row.name, row.summary))
        .collect();
    lines.join("\n")
}
