use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use rectbin::cli::{CliArgs, Command};
use rectbin::instance::{self, GeneratorParams};
use rectbin::output::{draw_bin, render_summary, write_report};
use rectbin::packing::DimensionBounds;
use rectbin::solver::Solver;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because the logger may not be
        // initialized when argument handling fails
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let common = match &cli.command {
        Command::Pack(args) => args.common.clone(),
        Command::Random(args) => args.common.clone(),
    };

    env_logger::Builder::new()
        .filter_level(if common.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("rectbin v{}", env!("CARGO_PKG_VERSION"));

    let instance = match &cli.command {
        Command::Pack(args) => instance::load_instance(&args.input)?,
        Command::Random(args) => {
            let bounds = DimensionBounds::new(
                args.min_width,
                args.min_height,
                args.max_width,
                args.max_height,
            )?;
            instance::generate(&GeneratorParams {
                count: args.count,
                bin_side: args.bin_side,
                bounds,
                seed: args.seed,
            })?
        }
    };
    info!(
        "instance: {} rectangles, bin side {}",
        instance.rects.len(),
        instance.bin_side
    );

    let mut solver = Solver::new(instance.bin_side).optimize(!common.no_optimize);
    if let Some(ordering) = common.ordering {
        solver = solver.ordering(ordering);
    }
    if let Some(max_passes) = common.max_passes {
        solver = solver.max_passes(max_passes);
    }

    let solution = solver.solve(instance.rects)?;

    info!(
        "packed into {} bin(s) (first fit: {}, area lower bound: {})",
        solution.bin_count(),
        solution.initial_bins,
        solution.lower_bound()
    );
    info!("utilization {:.1}%", solution.utilization() * 100.0);
    if solution.capped {
        warn!("compaction was stopped by the pass cap; result is valid but may not be a local optimum");
    }

    print!("{}", render_summary(&solution));

    if common.draw {
        for bin in &solution.bins {
            print!("{}", draw_bin(bin));
        }
    }

    if let Some(path) = &common.output {
        write_report(&solution, instance.bin_side, path)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
