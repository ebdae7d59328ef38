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
use crate::DomainHit;

/// Resolve overlapping hits with the best match cascade.
///
/// Each pass walks adjacent pairs in ascending `ali_from` order and flags
/// the worse hit (larger-or-equal e-value; ties flag the earlier hit) of
/// every strictly overlapping pair, `previous.ali_to > current.ali_from`.
/// Abutting hits are left alone. Flagged hits are removed after the pass and
/// the pass repeats, because a removal can make former neighbours adjacent;
/// the loop ends when a pass removes nothing. Every repeated pass strictly
/// shrinks the hit count, so the iteration terminates.
///
/// Expects `hits` sorted by ascending `ali_from`.
pub fn resolve_overlaps(mut hits: Vec<DomainHit>) -> Vec<DomainHit> {
    loop {
        let mut flagged = vec![false; hits.len()];
        for i in 1..hits.len() {
            let prev = &hits[i - 1];
            let cur = &hits[i];
            if prev.ali_to > cur.ali_from {
                if prev.evalue >= cur.evalue {
                    flagged[i - 1] = true;
                } else {
                    flagged[i] = true;
                }
            }
        }

        if !flagged.iter().any(|f| *f) {
            return hits;
        }

        let mut idx = 0;
        hits.retain(|_| {
            let remove = flagged[idx];
            idx += 1;
            !remove
        });
    }
}
