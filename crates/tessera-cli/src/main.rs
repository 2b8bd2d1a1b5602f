//! Tessera CLI — merge, inspect, and validate meshes.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(version, about = "Tessera — stitch procedural meshes into one")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the sources of a plan file and export the result.
    Merge {
        /// Path to the merge plan (TOML).
        #[arg(short, long, default_value = "merge.toml")]
        plan: String,

        /// Output mesh path. `.bin` writes binary, anything else JSON.
        #[arg(short, long, default_value = "merged.json")]
        output: String,

        /// Write binary regardless of the output extension.
        #[arg(long)]
        binary: bool,
    },

    /// Print statistics for an exported mesh.
    Inspect {
        /// Path to a `.json` or `.bin` mesh.
        path: String,
    },

    /// Validate a merge plan or a mesh file.
    Validate {
        /// Path to a plan (`.toml`) or mesh (`.json` / `.bin`).
        path: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge {
            plan,
            output,
            binary,
        } => commands::merge(&plan, &output, binary),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
