//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spotgen")]
#[command(version, about = "Generate per-spot pages from one HTML template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one page per spot
    Generate(GenerateArgs),

    /// List configured spots
    Spots {
        /// Path to spotgen.toml
        #[arg(short, long, env = "SPOTGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify the template's regions without writing anything
    Check(CheckArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to spotgen.toml
    #[arg(short, long, env = "SPOTGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Template file (overrides the config)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output directory (overrides the config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Generate only these spots (repeatable)
    #[arg(long = "only", value_name = "ID")]
    pub only: Vec<String>,

    /// Stop at the first failed spot
    #[arg(long)]
    pub fail_fast: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to spotgen.toml
    #[arg(short, long, env = "SPOTGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Template file (overrides the config)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
