// xdomize: Convert domain scanner hit tables into xdom architectures.
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version)]
#[command(about = "Convert hmmscan --domtblout or pfam_scan.pl output into xdom domain architectures")]
pub struct Cli {
    // Input hit table, plain or gzipped
    #[arg(help = "Input file")]
    pub input_file: PathBuf,

    // Output file path
    #[arg(short = 'o', long = "output", required = true)]
    pub out_file: PathBuf,

    // Join split hits into one spanning hit
    #[arg(short = 'm', long = "merge", default_value_t = false)]
    pub merge: bool,

    // Fold runs of >= N consecutive same-domain hits
    #[arg(short = 'C', long = "collapse", value_name = "N")]
    pub collapse: Option<usize>,

    // Keep only the best hit of each overlapping pair
    #[arg(short = 'r', long = "resolve-overlaps", default_value_t = false)]
    pub resolve_overlaps: bool,

    // Drop hits with an e-value above the threshold
    #[arg(short = 'e', long = "evalue", value_name = "FLOAT")]
    pub evalue: Option<f64>,

    // Report accessions (PF00001) instead of domain names (7tm_1)
    #[arg(long = "acc", default_value_t = false)]
    pub acc: bool,

    // Report clan accessions where the scan assigned one
    #[arg(long = "clan", default_value_t = false)]
    pub clan: bool,

    // Skip queries whose hits were all filtered out
    #[arg(long = "remove-empties", default_value_t = false)]
    pub remove_empties: bool,

    // Verbosity
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}
