use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edge_batch")]
#[command(about = "Batch Canny edge detection over a directory of images")]
#[command(version)]
pub struct Cli {
    /// Directory containing the source images (not scanned recursively)
    #[arg(default_value = "input_images")]
    pub input_dir: PathBuf,

    /// Directory the edge maps are written to (created if missing)
    #[arg(default_value = "output_edges")]
    pub output_dir: PathBuf,

    /// Number of worker tasks (defaults to CPU count minus one)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Suppress progress bar and per-item messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}
