use clap::{ArgAction, Parser};
use cronex::Schedule;
use std::process;
use tracing::{debug, Level};

const USAGE: &str =
    r#"usage: cronex "[minute] [hour] [day of month] [month] [day of week] [command]""#;

#[derive(Parser)]
#[command(
    name = "cronex",
    about = "Expand a cron instruction into the times it runs",
    version
)]
struct Cli {
    /// Cron instruction (e.g., "*/15 0 1,15 * 1-5 /usr/bin/find")
    instruction: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Validate the instruction without printing the schedule
    #[arg(long)]
    check: bool,

    /// Print diagnostics on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let instruction = match cli.instruction {
        Some(ref instruction) => instruction.as_str(),
        None => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };
    debug!(instruction, "expanding instruction");

    let schedule = match Schedule::parse(instruction) {
        Ok(s) => s,
        Err(e) if e.is_usage() => {
            debug!(error = %e, "rejected instruction");
            eprintln!("{USAGE}");
            process::exit(2);
        }
        Err(e) => {
            debug!(error = ?e, "expansion failed");
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };
    tracing::trace!(?schedule, "expanded schedule");

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.json {
        match serde_json::to_string_pretty(&schedule) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    println!("{schedule}");
}
