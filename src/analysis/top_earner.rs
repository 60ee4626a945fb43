use crate::{
    analysis::{
        box_office::box_office_over_time,
        iterator::{aggregate_column, ErrorPolicy},
    },
    error::{AggregationError, Error, Result},
    model::table::Table,
};

/// Display name and career box office of the actor in column `index`.
pub fn total_box_office(table: &Table, index: usize) -> Result<(String, u64)> {
    let aggregated = aggregate_column(table, index, box_office_over_time)?;
    let total = aggregated
        .summary
        .values()
        .try_fold(0u64, |acc, yearly| acc.checked_add(*yearly))
        .ok_or_else(|| AggregationError {
            column: index,
            field: "box_office",
            value: aggregated.column.label.clone(),
            reason: "career total overflows".to_string(),
        })?;
    Ok((aggregated.column.display_name().to_string(), total))
}

/// Name of the actor whose films made the most at the box office.
///
/// On a tie the earliest column wins. With [`ErrorPolicy::SkipAndContinue`]
/// columns whose box office cannot be read take no part.
pub fn highest_paid_actor(table: &Table, policy: ErrorPolicy) -> Result<String> {
    let mut best: Option<(String, u64)> = None;

    for index in 0..table.len() {
        let (name, money) = match total_box_office(table, index) {
            Ok(total) => total,
            Err(Error::Aggregation(e)) if policy == ErrorPolicy::SkipAndContinue => {
                log::warn!("Leaving column {} out of the top earner: {}", index, e);
                continue;
            }
            Err(e) => return Err(e),
        };
        log::debug!("Column {} ({}) earned {}", index, name, money);

        let is_better = best
            .as_ref()
            .map_or(true, |(_, best_money)| money > *best_money);
        if is_better {
            best = Some((name, money));
        }
    }

    best.map(|(name, _)| name).ok_or(Error::EmptyTable)
}
