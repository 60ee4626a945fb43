use crate::{
    error::{AggregationError, Error, Result},
    model::table::{ActorColumn, Table},
};

/// What to do when one column cannot be aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    AbortOnFirstError,
    SkipAndContinue,
}

/// An aggregator's summary together with the column it was computed from.
#[derive(Debug)]
pub struct Aggregated<'a, T> {
    pub summary: T,
    pub column: &'a ActorColumn,
    pub index: usize,
}

#[derive(Debug, Default, PartialEq)]
pub struct RunReport {
    /// Column indices that were presented, in visiting order.
    pub presented: Vec<usize>,
    pub skipped: Vec<AggregationError>,
}

pub fn aggregate_column<'a, T, A>(
    table: &'a Table,
    index: usize,
    aggregate: A,
) -> Result<Aggregated<'a, T>>
where
    A: Fn(&ActorColumn, usize) -> std::result::Result<T, AggregationError>,
{
    let column = table.column(index)?;
    let summary = aggregate(column, index)?;
    Ok(Aggregated {
        summary,
        column,
        index,
    })
}

/// Runs `aggregate` over every column in index order and hands each summary
/// to `present`.
///
/// Presentation failures always stop the run; aggregation failures follow
/// `policy`.
pub fn do_for_all<T, A, P>(
    table: &Table,
    aggregate: A,
    mut present: P,
    policy: ErrorPolicy,
) -> Result<RunReport>
where
    A: Fn(&ActorColumn, usize) -> std::result::Result<T, AggregationError>,
    P: FnMut(&Aggregated<'_, T>, &Table) -> Result<()>,
{
    let mut report = RunReport::default();

    for index in 0..table.len() {
        match aggregate_column(table, index, &aggregate) {
            Ok(aggregated) => {
                present(&aggregated, table)?;
                report.presented.push(index);
            }
            Err(Error::Aggregation(e)) if policy == ErrorPolicy::SkipAndContinue => {
                log::warn!("Skipping column {}: {}", index, e);
                report.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
