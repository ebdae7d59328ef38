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

//! Serialization of [QueryGroup]s into xdom blocks.
//!
//! One block per query: a `>` header line, then one line per hit in
//! ascending alignment start order. Blocks are separated only by the next
//! header; there is no trailing delimiter.

use std::io::Write;

use crate::DomainHit;
use crate::QueryGroup;

type E = Box<dyn std::error::Error>;

/// Format the xdom header line for one query sequence.
///
/// The sequence length and its separating tab are omitted when the input
/// layout does not carry it.
pub fn format_header(group: &QueryGroup) -> String {
    match group.length {
        Some(length) => format!(">{}\t{}\n", group.id, length),
        None => format!(">{}\n", group.id),
    }
}

/// Format one domain hit as an xdom line.
///
/// E-values print in shortest-roundtrip form, so the sentinel on synthesized
/// hits appears as `-1.0` and scientific inputs stay scientific.
pub fn format_hit_line(hit: &DomainHit) -> String {
    match &hit.comment {
        Some(comment) => format!(
            "{}\t{}\t{}\t{:?}\t;{}\n",
            hit.ali_from, hit.ali_to, hit.id, hit.evalue, comment
        ),
        None => format!("{}\t{}\t{}\t{:?}\n", hit.ali_from, hit.ali_to, hit.id, hit.evalue),
    }
}

/// Write one query group as an xdom block.
pub fn write_group<W: Write>(group: &QueryGroup, conn: &mut W) -> Result<(), E> {
    conn.write_all(format_header(group).as_bytes())?;
    for hit in &group.hits {
        conn.write_all(format_hit_line(hit).as_bytes())?;
    }
    Ok(())
}
