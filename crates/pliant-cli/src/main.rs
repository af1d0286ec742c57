//! Pliant CLI — headless soft-body sessions and mesh inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pliant")]
#[command(version, about = "Pliant — soft-body mesh pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless demo session with generated models.
    Demo {
        /// Which model to spawn (cube, sphere, both).
        #[arg(short, long, default_value = "both")]
        model: String,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// Total mass per body.
        #[arg(long, default_value_t = 100.0)]
        mass: f32,

        /// Internal pressure coefficient per body.
        #[arg(long, default_value_t = 100.0)]
        pressure: f32,

        /// Capture frames to a JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a generated model's deduplication invariants.
    Validate {
        /// Which model to check (cube, sphere).
        model: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo {
            model,
            frames,
            mass,
            pressure,
            output,
        } => commands::demo(&model, frames, mass, pressure, output.as_deref()),
        Commands::Validate { model } => commands::validate(&model),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
