use crate::{
    analysis::{
        summary::{Buckets, Summary},
        year_range::{rating_bucket, sort_by_opening_year},
    },
    error::AggregationError,
    model::table::ActorColumn,
};

/// Year -> ratings in the order they were read.
pub type YearlyRatings = Summary<Vec<f64>>;

/// Collects ratings per year.
///
/// A show that ran `"2013–2018"` is filed under `"2018"`, its closing year;
/// a single-year title under its own year.
pub fn movie_ratings_over_time(
    column: &ActorColumn,
    index: usize,
) -> Result<YearlyRatings, AggregationError> {
    column.ensure_well_formed(index)?;

    let mut ratings = Buckets::default();

    for movie in column.records() {
        let (Some(year), Some(rating)) = (&movie.year_range, &movie.rating) else {
            continue;
        };

        let value = rating.trim().parse::<f64>().map_err(|e| AggregationError {
            column: index,
            field: "rating",
            value: rating.clone(),
            reason: e.to_string(),
        })?;

        ratings
            .entry_or_insert_with(rating_bucket(year), Vec::new)
            .push(value);
    }

    let entries = sort_by_opening_year(ratings.into_entries(), index)?;

    Ok(Summary::new(entries))
}
