use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rectbin")]
#[command(version, about = "2D rectangle bin packer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Pack rectangles from a JSON instance file
    Pack(PackArgs),
    /// Generate a random instance and pack it
    Random(RandomArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PackArgs {
    /// Instance file (JSON)
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RandomArgs {
    /// Number of rectangles to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    pub count: usize,

    /// Bin side length
    #[arg(short, long, default_value_t = 10)]
    pub bin_side: u32,

    /// Smallest allowed rectangle width
    #[arg(long, default_value_t = 1)]
    pub min_width: u32,

    /// Largest allowed rectangle width
    #[arg(long, default_value_t = 5)]
    pub max_width: u32,

    /// Smallest allowed rectangle height
    #[arg(long, default_value_t = 1)]
    pub min_height: u32,

    /// Largest allowed rectangle height
    #[arg(long, default_value_t = 5)]
    pub max_height: u32,

    /// Seed for a reproducible instance
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Rectangle ordering for the greedy phase [default: area-desc]
    #[arg(long, value_enum)]
    pub ordering: Option<RectOrdering>,

    /// Skip the local-search compaction pass
    #[arg(long)]
    pub no_optimize: bool,

    /// Cap on local-search passes [default: 10000]
    #[arg(long)]
    pub max_passes: Option<usize>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Draw each bin as an ASCII square
    #[arg(long)]
    pub draw: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rectangle orderings for the greedy placement phase.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum RectOrdering {
    /// Largest area first (first-fit-decreasing)
    #[default]
    #[value(name = "area-desc")]
    AreaDesc,
    /// Tallest first
    #[value(name = "height-desc")]
    HeightDesc,
    /// Largest perimeter first
    #[value(name = "perimeter-desc")]
    PerimeterDesc,
}
