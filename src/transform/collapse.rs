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

/// Fold tandem repeats: a run of at least `rep_no` consecutive hits of the
/// same domain becomes one synthetic hit spanning the run.
///
/// Shorter runs pass through hit-for-hit. The synthetic hit carries the
/// [EVALUE_NONE] sentinel, zeroed hmm coordinates (never consulted after
/// this stage), and an instance-count annotation.
///
/// Expects `hits` sorted by ascending `ali_from`. A `rep_no` below 2 would
/// relabel singletons, so such values disable collapsing.
pub fn collapse_repeats(hits: Vec<DomainHit>, rep_no: usize) -> Vec<DomainHit> {
    if rep_no < 2 {
        return hits;
    }

    let mut collapsed: Vec<DomainHit> = Vec::with_capacity(hits.len());
    let mut run: Vec<DomainHit> = Vec::new();

    for cur in hits {
        if run.last().is_some_and(|last| last.id != cur.id) {
            flush_run(&mut collapsed, &mut run, rep_no);
        }
        run.push(cur);
    }
    flush_run(&mut collapsed, &mut run, rep_no);

    collapsed
}

fn flush_run(collapsed: &mut Vec<DomainHit>, run: &mut Vec<DomainHit>, rep_no: usize) {
    if run.len() >= rep_no {
        let first = &run[0];
        let last = &run[run.len() - 1];
        collapsed.push(DomainHit {
            id: first.id.clone(),
            ali_from: first.ali_from,
            ali_to: last.ali_to,
            hmm_from: 0,
            hmm_to: 0,
            evalue: EVALUE_NONE,
            comment: Some(format!("collapsed {} instances", run.len())),
        });
        run.clear();
    } else {
        collapsed.append(run);
    }
}
