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

// Layout specific implementations
pub mod hmmscan;
pub mod pfamscan;

use std::io::BufRead;

use regex::Regex;

use crate::DomainHit;
use crate::Format;
use crate::ParseOpts;

use crate::parser::hmmscan::read_hmmscan;
use crate::parser::pfamscan::read_pfamscan;

type E = Box<dyn std::error::Error>;

/// One data line of scanner output: the query it belongs to plus the hit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HitRecord {
    /// Query identifier, version suffix stripped.
    pub query_id: String,
    /// Query sequence length (hmmscan layout only).
    pub query_len: Option<u32>,
    /// The domain hit called on this line.
    pub hit: DomainHit,
}

/// A data line that does not conform to the detected layout.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// 1-based input line number.
    pub line: usize,
    pub reason: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "parse error on line {}: {}", self.line, self.reason)
    }
}

impl std::error::Error for ParseError {}

/// Strip a trailing version suffix (".2" in "P00533.2") from an identifier.
///
/// Identifiers that do not look like word characters followed by a dotted
/// number are returned unchanged.
pub fn strip_version(id: &str, version_re: &Regex) -> String {
    if version_re.is_match(id) {
        if let Some(dot) = id.find('.') {
            return id[..dot].to_string();
        }
    }
    id.to_string()
}

pub(crate) fn parse_num<T: std::str::FromStr>(
    field: &str,
    what: &str,
    line: usize,
) -> Result<T, E> {
    field.parse::<T>().map_err(|_| {
        ParseError {
            line,
            reason: format!("{} '{}' is not numeric", what, field),
        }
        .into()
    })
}

/// Streams scanner output line by line and yields one [HitRecord] per data
/// line.
///
/// Comment lines (`#`) and blank lines are skipped but still counted, so the
/// line numbers in [ParseError] match the input file. The sequence is lazy,
/// finite, and not restartable.
pub struct Reader<'a, R: BufRead> {
    conn: &'a mut R,
    format: Format,
    opts: ParseOpts,
    line_no: usize,

    version_re: Regex,
    clan_re: Regex,
}

impl<'a, R: BufRead> Reader<'a, R> {
    pub fn new(conn: &'a mut R, format: Format, opts: &ParseOpts) -> Self {
        Self {
            conn,
            format,
            opts: opts.clone(),
            line_no: 0,
            version_re: Regex::new(r"^\w+\.\d+$").unwrap(),
            clan_re: Regex::new(r"^CL\d+").unwrap(),
        }
    }
}

impl<R: BufRead> Iterator for Reader<'_, R> {
    type Item = Result<HitRecord, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = String::new();
            self.line_no += 1;
            match self.conn.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }

            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let record = match self.format {
                Format::Hmmscan => {
                    read_hmmscan(line, self.line_no, &self.opts, &self.version_re)
                }
                Format::Pfamscan => {
                    read_pfamscan(line, self.line_no, &self.opts, &self.version_re, &self.clan_re)
                }
            };
            return Some(record);
        }
    }
}
