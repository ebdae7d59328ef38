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
use regex::Regex;

use crate::DomainHit;
use crate::ParseOpts;
use crate::parser::{parse_num, strip_version, HitRecord, ParseError};

type E = Box<dyn std::error::Error>;

/// Parse one line of hmmscan `--domtblout` output.
///
/// Columns consumed: 0 domain name, 1 domain accession, 3 query id, 5 query
/// length, 12 independent e-value, 15-16 hmm coordinates, 17-18 alignment
/// coordinates. The trailing free-text description may add any number of
/// fields.
pub fn read_hmmscan(
    line: &str,
    line_no: usize,
    opts: &ParseOpts,
    version_re: &Regex,
) -> Result<HitRecord, E> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 19 {
        return Err(ParseError {
            line: line_no,
            reason: format!("expected at least 19 fields for the hmmscan layout, found {}", fields.len()),
        }
        .into());
    }

    let query_id = strip_version(fields[3], version_re);
    let query_len = parse_num::<u32>(fields[5], "query length", line_no)?;
    let evalue = parse_num::<f64>(fields[12], "i-evalue", line_no)?;
    let hmm_from = parse_num::<u32>(fields[15], "hmm start", line_no)?;
    let hmm_to = parse_num::<u32>(fields[16], "hmm end", line_no)?;
    let ali_from = parse_num::<u32>(fields[17], "alignment start", line_no)?;
    let ali_to = parse_num::<u32>(fields[18], "alignment end", line_no)?;

    let id = if opts.acc_mode {
        strip_version(fields[1], version_re)
    } else {
        fields[0].to_string()
    };

    Ok(HitRecord {
        query_id,
        query_len: Some(query_len),
        hit: DomainHit { id, ali_from, ali_to, hmm_from, hmm_to, evalue, comment: None },
    })
}

// Tests
#[cfg(test)]
mod tests {

    const LINE: &str = "7tm_1 PF00001.21 268 P00533.2 - 120 2e-40 137.2 10.5 1 1 1.2e-43 1e-5 125.8 10.1 1 40 10 50 8 51 0.92 GPCR family";

    #[test]
    fn read_hmmscan_line() {
        use super::read_hmmscan;
        use crate::ParseOpts;
        use regex::Regex;

        let version_re = Regex::new(r"^\w+\.\d+$").unwrap();
        let got = read_hmmscan(LINE, 1, &ParseOpts::default(), &version_re).unwrap();

        assert_eq!(got.query_id, "P00533");
        assert_eq!(got.query_len, Some(120));
        assert_eq!(got.hit.id, "7tm_1");
        assert_eq!(got.hit.ali_from, 10);
        assert_eq!(got.hit.ali_to, 50);
        assert_eq!(got.hit.hmm_from, 1);
        assert_eq!(got.hit.hmm_to, 40);
        assert_eq!(got.hit.evalue, 1e-5);
        assert_eq!(got.hit.comment, None);
    }

    #[test]
    fn read_hmmscan_line_acc_mode() {
        use super::read_hmmscan;
        use crate::ParseOpts;
        use regex::Regex;

        let version_re = Regex::new(r"^\w+\.\d+$").unwrap();
        let opts = ParseOpts { acc_mode: true, ..Default::default() };
        let got = read_hmmscan(LINE, 1, &opts, &version_re).unwrap();

        // Accession is used, version suffix removed.
        assert_eq!(got.hit.id, "PF00001");
    }

    #[test]
    fn read_hmmscan_nonnumeric_coordinate() {
        use super::read_hmmscan;
        use crate::ParseOpts;
        use regex::Regex;

        let version_re = Regex::new(r"^\w+\.\d+$").unwrap();
        let bad = LINE.replace(" 10 50 ", " ten 50 ");
        let err = read_hmmscan(&bad, 7, &ParseOpts::default(), &version_re).unwrap_err();

        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("alignment start"));
    }
}
