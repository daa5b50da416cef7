//! mdnav - outline extraction for documentation pages

use std::process::ExitCode;

use clap::Parser;

use mdnav::outline::{ExtractOptions, extract_headings};

#[derive(Parser)]
#[command(name = "mdnav")]
#[command(version, about = "Extract navigation data from markdown documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdnav page.md                   Print the outline as JSON
    mdnav page.md -o outline.json   Write the outline to a file
    mdnav page.md --min-level 2 --max-level 4")]
struct Cli {
    /// Input markdown file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Lowest heading level to include
    #[arg(long, default_value_t = 2)]
    min_level: u8,

    /// Highest heading level to include
    #[arg(long, default_value_t = 3)]
    max_level: u8,

    /// Also include level-1 headings
    #[arg(long)]
    top_level: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let raw = std::fs::read_to_string(&cli.input).map_err(|e| e.to_string())?;

    let options = ExtractOptions {
        min_level: cli.min_level,
        max_level: cli.max_level,
        include_top_level: cli.top_level,
    };
    let headings = extract_headings(&raw, &options).map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&headings).map_err(|e| e.to_string())?;

    match &cli.output {
        Some(path) => std::fs::write(path, json).map_err(|e| e.to_string())?,
        None => println!("{json}"),
    }

    Ok(())
}
