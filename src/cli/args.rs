use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pbf-bounds")]
#[command(about = "Write the header bounding box of an OSM PBF extract to a bounds file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract bounds from the PBF directory into the bounds file (default)
    Extract(ExtractArgs),

    /// Print the header of a PBF extract without writing anything
    Inspect {
        #[arg(help = "PBF extract to inspect")]
        file: PathBuf,

        #[arg(long, help = "Print the header as JSON")]
        json: bool,
    },

    /// Print an existing bounds file
    Show {
        #[arg(
            short = 'o',
            long,
            help = "Bounds file to read [default: $BOUNDS_FILE or /app/config/bounds.json]"
        )]
        bounds_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    #[arg(
        short = 'd',
        long,
        help = "Directory containing the PBF extract [default: $PBF_DIR or /data/pbf]"
    )]
    pub pbf_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        help = "Output bounds file [default: $BOUNDS_FILE or /app/config/bounds.json]"
    )]
    pub bounds_file: Option<PathBuf>,

    #[arg(long, help = "Fail instead of picking one when several extracts exist")]
    pub require_single: bool,
}
