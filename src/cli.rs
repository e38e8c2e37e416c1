/*!
chartql Command Line Interface

Provides commands for executing chartql scripts and inspecting how they parse.
*/

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use chartql::writer::VegaLiteWriter;
use chartql::{api, parser, VERSION};

#[derive(Parser)]
#[command(name = "chartql")]
#[command(about = "A small DSL for declarative chart creation")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a chartql script and print the rendered chart
    Exec {
        /// The chartql script to execute
        script: String,

        /// Render with interactive affordances (tooltips)
        #[arg(short, long)]
        interactive: bool,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Execute a chartql script from a file
    Run {
        /// Path to a file containing a chartql script
        file: PathBuf,

        /// Render with interactive affordances (tooltips)
        #[arg(short, long)]
        interactive: bool,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Parse a script and show the AST (for debugging)
    Parse {
        /// The chartql script to parse
        script: String,

        /// Output format for the AST (json, debug)
        #[arg(long, default_value = "debug")]
        format: String,
    },

    /// Validate a script without rendering
    Validate {
        /// The chartql script to validate
        script: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Exec {
            script,
            interactive,
            output,
        } => cmd_exec(&script, interactive, output)?,

        Commands::Run {
            file,
            interactive,
            output,
        } => {
            let script = std::fs::read_to_string(&file)?;
            cmd_exec(&script, interactive, output)?;
        }

        Commands::Parse { script, format } => cmd_parse(&script, &format)?,

        Commands::Validate { script } => cmd_validate(&script)?,
    }

    Ok(())
}

fn cmd_exec(script: &str, interactive: bool, output: Option<PathBuf>) -> anyhow::Result<()> {
    let writer = VegaLiteWriter::new();
    let artifact = api::run(script, &writer, interactive)?;

    match output {
        Some(path) => std::fs::write(&path, artifact)?,
        None => println!("{}", artifact),
    }
    Ok(())
}

fn cmd_parse(script: &str, format: &str) -> anyhow::Result<()> {
    let statement = parser::parse(script)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&statement)?),
        _ => println!("{:#?}", statement),
    }
    Ok(())
}

fn cmd_validate(script: &str) -> anyhow::Result<()> {
    let prepared = api::prepare(script)?;
    let spec = prepared.spec();
    println!(
        "OK: \"{}\" ({}, {} x values, {} y values)",
        spec.label,
        prepared.chart_type().display_name(),
        spec.x_values.len(),
        spec.y_values.len()
    );
    Ok(())
}
