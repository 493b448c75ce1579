mod commands;
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
mod shutdown;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::variables::DEFAULT_IMAGE_BASE;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Skyrim SE journal variables", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a raw game clock value (days since a new game)
    Date {
        raw: f32,
        #[arg(short, long, default_value = "%h:%m %ld, day %md of %lm, %Y")]
        format: String,
    },
    /// Render a player position
    #[command(allow_negative_numbers = true)]
    Location {
        x: f32,
        y: f32,
        z: f32,
        /// Worldspace name
        #[arg(long)]
        world: Option<String>,
        /// Cell name
        #[arg(long)]
        cell: Option<String>,
        #[arg(short, long, default_value = "%wn, %cn: %x %y %z")]
        format: String,
    },
    /// Render the local wall-clock time
    LocalTime {
        #[arg(short, long, default_value = "%X %x")]
        format: String,
    },
    /// Write the built-in offset table as JSON
    Offsets {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in variables available with an offset table
    Variables {
        #[arg(short, long)]
        offsets: Option<PathBuf>,
        /// Module base address (hex)
        #[arg(long, default_value_t = format!("{:#x}", DEFAULT_IMAGE_BASE))]
        base: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Attach to the running game and print every variable until Ctrl-C
    Watch {
        #[arg(short, long)]
        pid: Option<u32>,
        #[arg(short, long)]
        offsets: Option<PathBuf>,
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("journal=info".parse()?))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Date { raw, format } => commands::render::date(raw, &format),
        Command::Location {
            x,
            y,
            z,
            world,
            cell,
            format,
        } => commands::render::location([x, y, z], world.as_deref(), cell.as_deref(), &format),
        Command::LocalTime { format } => commands::render::local_time(&format),
        Command::Offsets { output } => commands::offsets::run(output.as_deref()),
        Command::Variables {
            offsets,
            base,
            json,
        } => commands::variables::run(offsets, &base, json),
        Command::Watch {
            pid,
            offsets,
            interval_ms,
        } => commands::watch::run(pid, offsets, interval_ms),
    }
}
