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
use crate::parser::HitRecord;
use crate::ParseOpts;
use crate::QueryGroup;

type E = Box<dyn std::error::Error>;

/// Folds a stream of [HitRecord]s into one [QueryGroup] per contiguous run
/// of equal query ids.
///
/// The scanner writes its report grouped by query, so a change in query id
/// finalizes the group under construction. Two separated runs of the same id
/// produce two separate groups; no reordering happens across runs.
///
/// The e-value threshold, when configured, is applied to each record before
/// insertion. A dropped record still opens or continues its group, so a
/// query whose hits are all filtered out yields an empty group rather than
/// disappearing.
pub struct Grouper<I> {
    records: I,
    evalue: Option<f64>,
    current: Option<QueryGroup>,
}

impl<I: Iterator<Item = Result<HitRecord, E>>> Grouper<I> {
    pub fn new(records: I, opts: &ParseOpts) -> Self {
        Self {
            records,
            evalue: opts.evalue,
            current: None,
        }
    }

    fn finalize(group: &mut QueryGroup) {
        // Stable sort: hits sharing a start coordinate keep their input order.
        group.hits.sort_by_key(|hit| hit.ali_from);
    }
}

impl<I: Iterator<Item = Result<HitRecord, E>>> Iterator for Grouper<I> {
    type Item = Result<QueryGroup, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.records.next() {
                Some(Err(e)) => return Some(Err(e)),
                Some(Ok(record)) => {
                    let keep = self.evalue.map_or(true, |threshold| record.hit.evalue <= threshold);

                    let same_group = self
                        .current
                        .as_ref()
                        .map_or(false, |group| group.id == record.query_id);

                    if same_group {
                        if keep {
                            if let Some(group) = self.current.as_mut() {
                                group.hits.push(record.hit);
                            }
                        }
                        continue;
                    }

                    let finished = self.current.take();
                    let mut group = QueryGroup {
                        id: record.query_id,
                        length: record.query_len,
                        hits: Vec::new(),
                    };
                    if keep {
                        group.hits.push(record.hit);
                    }
                    self.current = Some(group);

                    if let Some(mut finished) = finished {
                        Self::finalize(&mut finished);
                        return Some(Ok(finished));
                    }
                }
                None => {
                    let mut finished = self.current.take()?;
                    Self::finalize(&mut finished);
                    return Some(Ok(finished));
                }
            }
        }
    }
}
