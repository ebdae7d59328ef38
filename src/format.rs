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
use std::io::BufRead;

use regex::Regex;

use crate::Format;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct UnknownFormat;

impl std::fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "No line matched a known scanner layout")
    }
}

impl std::error::Error for UnknownFormat {}

/// Determine the scanner layout of a hit table.
///
/// Scans forward past comment (`#`) and blank lines. A data line that splits
/// into at most 18 whitespace-separated fields is tested for an
/// accession-shaped token (two letters, digits, a dot, digits) in column 5
/// and classifies the input as [Format::Pfamscan] on a match; a line with
/// more than 18 fields is tested in column 1 and classifies as
/// [Format::Hmmscan]. The first matching line decides.
///
/// Consumes the reader; reopen the input before parsing.
///
/// ## Errors
///
/// Returns [UnknownFormat] if the input ends before any line matches.
pub fn detect_format<R: BufRead>(conn: &mut R) -> Result<Format, E> {
    let accession = Regex::new(r"[A-Za-z]{2}\d+\.\d+").unwrap();

    for line in conn.lines() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= 18 {
            if fields.len() > 5 && accession.is_match(fields[5]) {
                return Ok(Format::Pfamscan);
            }
        } else if accession.is_match(fields[1]) {
            return Ok(Format::Hmmscan);
        }
    }

    Err(Box::new(UnknownFormat {}))
}
