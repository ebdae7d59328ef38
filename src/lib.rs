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

//! xdomize is a library and a command-line client for converting the tabular
//! hit reports written by profile-based domain scanners into per-sequence
//! domain architectures in the xdom format.
//!
//! The following input layouts are supported and detected automatically:
//!   - [hmmscan](http://hmmer.org) `--domtblout` tables (one row per domain
//!     hit, 19+ whitespace-separated columns).
//!   - [pfam_scan.pl](https://www.ebi.ac.uk/Tools/pfa/pfamscan/) output
//!     (15 columns per hit).
//!
//! An xdom record is one header line per query sequence followed by one line
//! per domain hit, ordered by alignment start:
//!
//! ```text
//! >QUERYID	LENGTH
//! ALIFROM	ALITO	DOMAINID	EVALUE
//! ```
//!
//! Between parsing and output the hits of each query can be passed through
//! three optional, order-sensitive stages:
//!   - merging split hits (one domain reported as several partial alignments),
//!   - collapsing tandem repeat runs into a single annotation,
//!   - resolving overlaps with a best match cascade (iteratively discard the
//!     hit with the worse e-value from each overlapping pair).
//!
//! ## Usage
//!
//! ### Command line
//!
//! ```text
//! xdomize hits.domtblout -o architectures.xdom --merge --evalue 1e-5
//! ```
//!
//! ### Rust API
//!
//! The pipeline is strictly streaming: only one query's hits are resident at
//! a time, so inputs of any size can be converted. [convert_file] runs the
//! whole pipeline on paths, [detect_format] plus [convert_from_read_to_write]
//! do the same on anything implementing [BufRead] and [Write].
//!
//! For record-at-a-time access the building blocks are public:
//!
//!   - [Reader](parser::Reader): iterates over single hit records parsed from a [BufRead].
//!   - [Grouper](grouper::Grouper): folds hit records into one [QueryGroup] per query sequence.
//!   - [transform::apply]: runs the enabled architecture stages on a group.
//!   - [printer::write_group](printer::write_group): serializes a group as one xdom block.
//!
//! Convert a two-piece split hit into a single merged annotation:
//!
//! ```rust
//! use xdomize::{convert_from_read_to_write, Format, ParseOpts};
//! use std::io::Cursor;
//!
//! let mut input_bytes: Vec<u8> = Vec::new();
//! input_bytes.extend_from_slice(b"# hmmscan --domtblout\n");
//! input_bytes.extend_from_slice(b"PF00001 PF00001.21 90 seq1 - 120 1.1e-5 50.2 0.1 1 2 2.1e-9 1e-5 45.0 0.1 1 40 10 50 9 52 0.90 piece one\n");
//! input_bytes.extend_from_slice(b"PF00001 PF00001.21 90 seq1 - 120 1.1e-5 50.2 0.1 2 2 1.3e-9 1e-6 44.0 0.1 41 90 60 100 58 101 0.88 piece two\n");
//! let mut input = Cursor::new(input_bytes);
//!
//! let opts = ParseOpts { merge: true, ..Default::default() };
//!
//! let mut output: Vec<u8> = Vec::new();
//! convert_from_read_to_write(Format::Hmmscan, &opts, &mut input, &mut output).unwrap();
//!
//! assert_eq!(output, b">seq1\t120\n10\t100\tPF00001\t-1.0\t;2 merged hits\n".to_vec());
//! ```

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;

use flate2::read::MultiGzDecoder;

pub mod format;
pub mod grouper;
pub mod parser;
pub mod printer;
pub mod transform;

pub use crate::format::detect_format;

type E = Box<dyn std::error::Error>;

/// Supported scanner report layouts.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// hmmscan `--domtblout`, one row per domain hit, 19+ columns.
    Hmmscan,
    /// pfam_scan.pl output, 15 columns per hit.
    Pfamscan,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Format::Hmmscan => write!(f, "hmmscan"),
            Format::Pfamscan => write!(f, "pfamscan"),
        }
    }
}

/// E-value placeholder on synthesized (merged or collapsed) hits.
pub const EVALUE_NONE: f64 = -1.0;

/// One retained or synthesized domain call on a query sequence.
///
/// Coordinates are 1-based and inclusive, `ali_from <= ali_to`. The hmm
/// coordinates are only consulted by the merge stage and are not part of the
/// xdom output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DomainHit {
    /// Domain name, accession, or clan accession, depending on mode.
    pub id: String,
    /// Alignment start on the query sequence.
    pub ali_from: u32,
    /// Alignment end on the query sequence.
    pub ali_to: u32,
    /// Hit start on the profile model.
    pub hmm_from: u32,
    /// Hit end on the profile model.
    pub hmm_to: u32,
    /// Independent e-value, or [EVALUE_NONE] on synthesized hits.
    pub evalue: f64,
    /// Annotation such as "2 merged hits"; absent on unmodified hits.
    pub comment: Option<String>,
}

/// One query sequence's accumulated hits, ordered by alignment start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryGroup {
    /// Query identifier, version suffix stripped.
    pub id: String,
    /// Sequence length; only present in the hmmscan layout.
    pub length: Option<u32>,
    /// Hits sorted by `ali_from`, ties in input order.
    pub hits: Vec<DomainHit>,
}

/// Per-run conversion options.
///
/// Built once and passed by reference into the pipeline; nothing in the
/// pipeline mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOpts {
    /// Merge split hits.
    pub merge: bool,
    /// Collapse runs of at least this many consecutive same-domain hits.
    /// A threshold below 2 is rejected at the CLI boundary.
    pub collapse: Option<usize>,
    /// Resolve overlapping hits with the best match cascade.
    pub resolve_overlaps: bool,
    /// Drop hits whose independent e-value exceeds this threshold.
    pub evalue: Option<f64>,
    /// Identify domains by accession instead of name.
    pub acc_mode: bool,
    /// Substitute clan accessions for domain ids where known (pfam_scan input only).
    pub clan_mode: bool,
    /// Emit header-only blocks for queries with no retained hits.
    pub keep_empty: bool,
}

impl Default for ParseOpts {
    fn default() -> Self {
        ParseOpts {
            merge: false,
            collapse: None,
            resolve_overlaps: false,
            evalue: None,
            acc_mode: false,
            clan_mode: false,
            keep_empty: true,
        }
    }
}

/// Convert scanner output from [BufRead] to xdom on [Write].
///
/// `format` names the input layout; use [detect_format] first when it is not
/// known. Groups are converted and written one at a time, in input order.
///
/// ## Errors
///
/// Stops at the first malformed data line or I/O failure. Output written
/// before the failure is not removed; treat a non-success return as "discard
/// output".
///
/// ## Usage
///
/// ```rust
/// use xdomize::{convert_from_read_to_write, Format, ParseOpts};
/// use std::io::Cursor;
///
/// // pfam_scan layout: no sequence length in the header line
/// let data = b"P00533.2 57 167 55 168 PF01030.24 Recep_L_domain Domain 3 103 109 89.1 1.2e-25 1 CL0022\n";
/// let mut input = Cursor::new(data.to_vec());
///
/// let opts = ParseOpts::default();
/// let mut output: Vec<u8> = Vec::new();
/// convert_from_read_to_write(Format::Pfamscan, &opts, &mut input, &mut output).unwrap();
///
/// assert_eq!(output, b">P00533\n57\t167\tRecep_L_domain\t1.2e-25\n".to_vec());
/// ```
pub fn convert_from_read_to_write<R: BufRead, W: Write>(
    format: Format,
    opts: &ParseOpts,
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<(), E> {
    let reader = parser::Reader::new(conn_in, format, opts);
    let grouper = grouper::Grouper::new(reader, opts);

    let mut n_groups: usize = 0;
    for group in grouper {
        let mut group = group?;
        transform::apply(&mut group, opts);
        if group.hits.is_empty() && !opts.keep_empty {
            continue;
        }
        printer::write_group(&group, conn_out)?;
        n_groups += 1;
    }
    conn_out.flush()?;
    log::debug!("wrote {} query group(s)", n_groups);

    Ok(())
}

/// Open a scanner report for reading, decompressing gzipped files on the fly.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, E> {
    let mut conn = std::fs::File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;

    let mut magic = [0_u8; 2];
    let n_read = conn.read(&mut magic)?;
    conn.seek(SeekFrom::Start(0))?;

    if n_read == 2 && magic == [0x1f, 0x8b] {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(conn))))
    } else {
        Ok(Box::new(BufReader::new(conn)))
    }
}

/// Convert a scanner report file into an xdom file.
///
/// Runs layout detection in a separate pass over the input before the output
/// file is created, so an undetectable or unreadable input never leaves a
/// partial output behind.
pub fn convert_file(input: &Path, output: &Path, opts: &ParseOpts) -> Result<(), E> {
    let format = detect_format(&mut open_input(input)?)?;
    log::info!("{}: {} layout", input.display(), format);

    let mut conn_in = open_input(input)?;
    let conn_out = std::fs::File::create(output).map_err(|e| format!("{}: {}", output.display(), e))?;
    let mut conn_out = std::io::BufWriter::new(conn_out);

    convert_from_read_to_write(format, opts, &mut conn_in, &mut conn_out)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn convert_trivial_input_unmodified() {
        use super::{convert_from_read_to_write, Format, ParseOpts};
        use std::io::Cursor;

        // One query, one hit, all stages disabled: output reproduces the
        // coordinates, id, and e-value of the input.
        let data: Vec<u8> = b"7tm_1 PF00001.21 268 seq1 - 120 2e-40 137.2 10.5 1 1 1.2e-43 1e-5 125.8 10.1 1 40 10 50 8 51 0.92 GPCR\n".to_vec();
        let mut input = Cursor::new(data);

        let opts = ParseOpts::default();
        let mut got: Vec<u8> = Vec::new();
        convert_from_read_to_write(Format::Hmmscan, &opts, &mut input, &mut got).unwrap();

        let expected = b">seq1\t120\n10\t50\t7tm_1\t1e-5\n".to_vec();
        assert_eq!(got, expected);
    }

    #[test]
    fn convert_applies_evalue_filter() {
        use super::{convert_from_read_to_write, Format, ParseOpts};
        use std::io::Cursor;

        let mut data: Vec<u8> = b"seq1 10 50 8 51 PF00001.21 7tm_1 Domain 1 40 268 125.8 1e-5 1 CL0192\n".to_vec();
        data.extend_from_slice(b"seq1 60 100 58 101 PF00002.26 7tm_2 Domain 1 40 250 90.0 0.1 1 CL0192\n");
        let mut input = Cursor::new(data);

        let opts = ParseOpts { evalue: Some(1e-3), ..Default::default() };
        let mut got: Vec<u8> = Vec::new();
        convert_from_read_to_write(Format::Pfamscan, &opts, &mut input, &mut got).unwrap();

        // The 0.1 hit is above the threshold and dropped.
        let expected = b">seq1\n10\t50\t7tm_1\t1e-5\n".to_vec();
        assert_eq!(got, expected);
    }

    #[test]
    fn convert_keeps_empty_groups_by_default() {
        use super::{convert_from_read_to_write, Format, ParseOpts};
        use std::io::Cursor;

        let mut data: Vec<u8> = b"seq1 10 50 8 51 PF00001.21 7tm_1 Domain 1 40 268 125.8 0.5 1 CL0192\n".to_vec();
        data.extend_from_slice(b"seq2 60 100 58 101 PF00002.26 7tm_2 Domain 1 40 250 90.0 1e-8 1 CL0192\n");

        let opts = ParseOpts { evalue: Some(1e-3), ..Default::default() };

        let mut input = Cursor::new(data.clone());
        let mut got: Vec<u8> = Vec::new();
        convert_from_read_to_write(Format::Pfamscan, &opts, &mut input, &mut got).unwrap();

        // seq1 lost its only hit but still gets a header line.
        let expected = b">seq1\n>seq2\n60\t100\t7tm_2\t1e-8\n".to_vec();
        assert_eq!(got, expected);

        // ...unless empty groups are dropped.
        let opts = ParseOpts { evalue: Some(1e-3), keep_empty: false, ..Default::default() };
        let mut input = Cursor::new(data);
        let mut got: Vec<u8> = Vec::new();
        convert_from_read_to_write(Format::Pfamscan, &opts, &mut input, &mut got).unwrap();

        let expected = b">seq2\n60\t100\t7tm_2\t1e-8\n".to_vec();
        assert_eq!(got, expected);
    }

    #[test]
    fn convert_gzipped_input_file() {
        use super::{convert_file, ParseOpts};
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let data = b"seq1 10 50 8 51 PF00001.21 7tm_1 Domain 1 40 268 125.8 1e-5 1 CL0192\n";

        let in_path = std::env::temp_dir().join("xdomize_gzipped_hits.txt.gz");
        let out_path = std::env::temp_dir().join("xdomize_gzipped_hits.xdom");

        let mut encoder =
            GzEncoder::new(std::fs::File::create(&in_path).unwrap(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap();

        // Detection and parsing both read through the gzip decoder.
        convert_file(&in_path, &out_path, &ParseOpts::default()).unwrap();

        let got = std::fs::read(&out_path).unwrap();
        assert_eq!(got, b">seq1\n10\t50\t7tm_1\t1e-5\n".to_vec());

        let _ = std::fs::remove_file(&in_path);
        let _ = std::fs::remove_file(&out_path);
    }

    #[test]
    fn convert_reports_parse_error_line() {
        use super::{convert_from_read_to_write, Format, ParseOpts};
        use std::io::Cursor;

        let mut data: Vec<u8> = b"# comment\n".to_vec();
        data.extend_from_slice(b"seq1 10 50 8 51 PF00001.21 7tm_1 Domain 1 40 268 125.8 1e-5 1 CL0192\n");
        data.extend_from_slice(b"seq1 sixty 100 58 101 PF00002.26 7tm_2 Domain 1 40 250 90.0 1e-8 1 CL0192\n");
        let mut input = Cursor::new(data);

        let opts = ParseOpts::default();
        let mut got: Vec<u8> = Vec::new();
        let err = convert_from_read_to_write(Format::Pfamscan, &opts, &mut input, &mut got).unwrap_err();

        assert!(err.to_string().contains("line 3"));
    }
}
