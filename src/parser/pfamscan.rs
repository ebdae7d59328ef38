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

/// Parse one line of pfam_scan.pl output.
///
/// Columns consumed: 0 query id, 1-2 alignment coordinates, 5 domain
/// accession, 6 domain name, 8-9 hmm coordinates, 12 e-value, 14 clan id.
/// The layout carries no query sequence length.
pub fn read_pfamscan(
    line: &str,
    line_no: usize,
    opts: &ParseOpts,
    version_re: &Regex,
    clan_re: &Regex,
) -> Result<HitRecord, E> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 15 {
        return Err(ParseError {
            line: line_no,
            reason: format!("expected at least 15 fields for the pfam_scan layout, found {}", fields.len()),
        }
        .into());
    }

    let query_id = strip_version(fields[0], version_re);
    let ali_from = parse_num::<u32>(fields[1], "alignment start", line_no)?;
    let ali_to = parse_num::<u32>(fields[2], "alignment end", line_no)?;
    let hmm_from = parse_num::<u32>(fields[8], "hmm start", line_no)?;
    let hmm_to = parse_num::<u32>(fields[9], "hmm end", line_no)?;
    let evalue = parse_num::<f64>(fields[12], "e-value", line_no)?;

    let mut id = if opts.acc_mode {
        strip_version(fields[5], version_re)
    } else {
        fields[6].to_string()
    };
    if opts.clan_mode && clan_re.is_match(fields[14]) {
        id = fields[14].to_string();
    }

    Ok(HitRecord {
        query_id,
        query_len: None,
        hit: DomainHit { id, ali_from, ali_to, hmm_from, hmm_to, evalue, comment: None },
    })
}

// Tests
#[cfg(test)]
mod tests {

    const LINE: &str = "P00533.2 57 167 55 168 PF01030.24 Recep_L_domain Domain 3 103 109 89.1 1.2e-25 1 CL0022";

    #[test]
    fn read_pfamscan_line() {
        use super::read_pfamscan;
        use crate::ParseOpts;
        use regex::Regex;

        let version_re = Regex::new(r"^\w+\.\d+$").unwrap();
        let clan_re = Regex::new(r"^CL\d+").unwrap();
        let got = read_pfamscan(LINE, 1, &ParseOpts::default(), &version_re, &clan_re).unwrap();

        assert_eq!(got.query_id, "P00533");
        assert_eq!(got.query_len, None);
        assert_eq!(got.hit.id, "Recep_L_domain");
        assert_eq!(got.hit.ali_from, 57);
        assert_eq!(got.hit.ali_to, 167);
        assert_eq!(got.hit.hmm_from, 3);
        assert_eq!(got.hit.hmm_to, 103);
        assert_eq!(got.hit.evalue, 1.2e-25);
    }

    #[test]
    fn read_pfamscan_line_acc_mode() {
        use super::read_pfamscan;
        use crate::ParseOpts;
        use regex::Regex;

        let version_re = Regex::new(r"^\w+\.\d+$").unwrap();
        let clan_re = Regex::new(r"^CL\d+").unwrap();
        let opts = ParseOpts { acc_mode: true, ..Default::default() };
        let got = read_pfamscan(LINE, 1, &opts, &version_re, &clan_re).unwrap();

        assert_eq!(got.hit.id, "PF01030");
    }

    #[test]
    fn read_pfamscan_line_clan_mode() {
        use super::read_pfamscan;
        use crate::ParseOpts;
        use regex::Regex;

        let version_re = Regex::new(r"^\w+\.\d+$").unwrap();
        let clan_re = Regex::new(r"^CL\d+").unwrap();
        let opts = ParseOpts { clan_mode: true, ..Default::default() };
        let got = read_pfamscan(LINE, 1, &opts, &version_re, &clan_re).unwrap();

        assert_eq!(got.hit.id, "CL0022");

        // "No_clan" in the clan column leaves the domain name in place.
        let no_clan = LINE.replace("CL0022", "No_clan");
        let got = read_pfamscan(&no_clan, 1, &opts, &version_re, &clan_re).unwrap();
        assert_eq!(got.hit.id, "Recep_L_domain");
    }
}
