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
use clap::Parser;

use xdomize::ParseOpts;

mod cli;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

fn main() {
    let cli = cli::Cli::parse();
    init_log(if cli.verbose { 2 } else { 1 });

    if cli.collapse.is_some_and(|rep_no| rep_no < 2) {
        log::error!("--collapse needs a repeat count of at least 2");
        std::process::exit(1);
    }

    let opts = ParseOpts {
        merge: cli.merge,
        collapse: cli.collapse,
        resolve_overlaps: cli.resolve_overlaps,
        evalue: cli.evalue,
        acc_mode: cli.acc,
        clan_mode: cli.clan,
        keep_empty: !cli.remove_empties,
    };

    if let Err(e) = xdomize::convert_file(&cli.input_file, &cli.out_file, &opts) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
