use crate::{
    analysis::summary::{Buckets, Summary},
    error::AggregationError,
    model::table::ActorColumn,
};

/// Genre -> number of titles, fewest first.
pub type GenreFrequency = Summary<u32>;

/// Counts how often each genre shows up in an actor's filmography.
///
/// Genres with the same count keep the order in which they were first seen.
/// Labels are used exactly as scraped.
pub fn genres_over_career(
    column: &ActorColumn,
    index: usize,
) -> Result<GenreFrequency, AggregationError> {
    column.ensure_well_formed(index)?;

    let mut counts = Buckets::default();

    for movie in column.records() {
        let Some(genres) = &movie.genres else {
            continue;
        };
        for genre in genres {
            *counts.entry_or_insert_with(genre, || 0u32) += 1;
        }
    }

    let mut entries = counts.into_entries();
    entries.sort_by_key(|(_, count)| *count);

    Ok(Summary::new(entries))
}
