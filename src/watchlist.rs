//! Presentation helpers for resolved watchlists.

use std::collections::BTreeMap;

use watchlist_common::{Entry, MetadataRecord, Tag};

/// Group records by their watchlist collection.
///
/// Groups come out in [`Tag`] order; records inside a group keep their
/// input order. Tags with no records are absent.
pub fn group_by_tag(records: &[MetadataRecord]) -> BTreeMap<Tag, Vec<&MetadataRecord>> {
    let mut groups: BTreeMap<Tag, Vec<&MetadataRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.category).or_default().push(record);
    }
    groups
}

/// Number of requested entries with no matching record.
///
/// Lets the caller tell "nothing in this collection" apart from "asked for N
/// and got fewer back", which is when a retry is worth offering.
pub fn missing_entries(requested: &[Entry], records: &[MetadataRecord]) -> usize {
    requested
        .iter()
        .filter(|entry| {
            !records
                .iter()
                .any(|r| r.id == entry.id && r.media_type == entry.media_type)
        })
        .count()
}
