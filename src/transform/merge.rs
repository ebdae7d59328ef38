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
use crate::EVALUE_NONE;

/// Join split hits: runs of same-domain pieces whose profile and sequence
/// coordinates both advance with a gap.
///
/// A pair (previous, current) with equal ids merges when
/// `previous.hmm_to < current.hmm_from` and
/// `previous.ali_to < current.ali_from`, meaning the scan reported one
/// domain instance as several partial alignments. The merged hit spans the first
/// piece's start to the last piece's end on both coordinate systems, carries
/// the [EVALUE_NONE] sentinel, and is annotated with the piece count. Pairs
/// that overlap or regress, and pairs of different domains, flush the pending
/// hit unchanged.
///
/// Expects `hits` sorted by ascending `ali_from`.
pub fn merge_split_hits(hits: Vec<DomainHit>) -> Vec<DomainHit> {
    let mut merged: Vec<DomainHit> = Vec::with_capacity(hits.len());
    let mut pending: Option<DomainHit> = None;
    let mut n_pieces: usize = 1;

    for cur in hits {
        let prev = match pending.take() {
            Some(prev) => prev,
            None => {
                pending = Some(cur);
                continue;
            }
        };

        let split = prev.id == cur.id && prev.hmm_to < cur.hmm_from && prev.ali_to < cur.ali_from;
        if split {
            n_pieces += 1;
            pending = Some(DomainHit {
                id: prev.id,
                ali_from: prev.ali_from,
                ali_to: cur.ali_to,
                hmm_from: prev.hmm_from,
                hmm_to: cur.hmm_to,
                evalue: EVALUE_NONE,
                comment: Some(format!("{} merged hits", n_pieces)),
            });
        } else {
            merged.push(prev);
            n_pieces = 1;
            pending = Some(cur);
        }
    }
    if let Some(prev) = pending {
        merged.push(prev);
    }

    merged
}
