use crate::{
    analysis::{
        numeric::{extract_number, has_digits},
        summary::{Buckets, Summary},
        year_range::sort_by_opening_year,
    },
    error::AggregationError,
    model::table::ActorColumn,
};

/// Raw year text -> summed box office, ordered by opening year.
pub type YearlyBoxOffice = Summary<u64>;

/// Sums box office collections per release year.
///
/// The raw year text is the key, so `"2013–2018"` and `"2013"` stay apart.
/// Records without a year or a box office figure are left out, as are figures
/// that contain no digits at all.
pub fn box_office_over_time(
    column: &ActorColumn,
    index: usize,
) -> Result<YearlyBoxOffice, AggregationError> {
    column.ensure_well_formed(index)?;

    let mut totals = Buckets::default();

    for movie in column.records() {
        let (Some(year), Some(box_office)) = (&movie.year_range, &movie.box_office) else {
            continue;
        };

        if !has_digits(box_office) {
            log::warn!(
                "Skipping box office {:?} for {:?} in column {}: no digits",
                box_office,
                movie.title,
                index
            );
            continue;
        }

        let amount = extract_number(box_office).map_err(|e| AggregationError {
            column: index,
            field: "box_office",
            value: box_office.clone(),
            reason: e.to_string(),
        })?;

        let total = totals.entry_or_insert_with(year, || 0u64);
        *total = total.checked_add(amount).ok_or_else(|| AggregationError {
            column: index,
            field: "box_office",
            value: box_office.clone(),
            reason: format!("total for {} overflows", year),
        })?;
    }

    let entries = sort_by_opening_year(totals.into_entries(), index)?;

    Ok(Summary::new(entries))
}
