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

//! Architecture transformation stages.
//!
//! Each stage consumes and returns an ordered hit collection and assumes its
//! input is sorted by ascending alignment start. [apply] runs the enabled
//! stages in a fixed order: merge, then collapse, then resolve overlaps.

pub mod collapse;
pub mod merge;
pub mod overlap;

pub use collapse::collapse_repeats;
pub use merge::merge_split_hits;
pub use overlap::resolve_overlaps;

use crate::ParseOpts;
use crate::QueryGroup;

/// Run the enabled stages on one query group.
pub fn apply(group: &mut QueryGroup, opts: &ParseOpts) {
    if opts.merge {
        group.hits = merge_split_hits(std::mem::take(&mut group.hits));
    }
    if let Some(rep_no) = opts.collapse {
        group.hits = collapse_repeats(std::mem::take(&mut group.hits), rep_no);
    }
    if opts.resolve_overlaps {
        group.hits = resolve_overlaps(std::mem::take(&mut group.hits));
    }
}
