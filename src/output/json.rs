use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::error::PackError;
use crate::packing::Bin;
use crate::solver::PackingSolution;

#[derive(Serialize)]
struct JsonReport {
    meta: Meta,
    bin_side: u32,
    bin_capacity: u64,
    stats: Stats,
    bins: Vec<JsonBin>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Stats {
    initial_bins: usize,
    final_bins: usize,
    lower_bound: usize,
    moves: usize,
    passes: usize,
    utilization: f64,
}

#[derive(Serialize)]
struct JsonBin {
    index: usize,
    occupied_area: u64,
    free_area: u64,
    rects: Vec<JsonRect>,
}

#[derive(Serialize)]
struct JsonRect {
    id: u64,
    width: u32,
    height: u32,
    area: u64,
}

/// Write a JSON report of the solution.
pub fn write_report(solution: &PackingSolution, bin_side: u32, path: &Path) -> Result<()> {
    let report = JsonReport {
        meta: Meta {
            app: "rectbin",
            version: env!("CARGO_PKG_VERSION"),
        },
        bin_side,
        bin_capacity: u64::from(bin_side) * u64::from(bin_side),
        stats: Stats {
            initial_bins: solution.initial_bins,
            final_bins: solution.bin_count(),
            lower_bound: solution.lower_bound(),
            moves: solution.moves,
            passes: solution.passes,
            utilization: solution.utilization(),
        },
        bins: solution
            .bins
            .iter()
            .enumerate()
            .map(|(index, bin)| bin_to_json(index, bin))
            .collect(),
    };

    let content = serde_json::to_string_pretty(&report)?;
    fs::write(path, content).map_err(|e| PackError::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn bin_to_json(index: usize, bin: &Bin) -> JsonBin {
    JsonBin {
        index,
        occupied_area: bin.occupied_area(),
        free_area: bin.free_area(),
        rects: bin
            .rects()
            .iter()
            .map(|rect| JsonRect {
                id: rect.id(),
                width: rect.width(),
                height: rect.height(),
                area: rect.area(),
            })
            .collect(),
    }
}
