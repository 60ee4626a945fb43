use std::path::Path;

pub mod analysis;
use analysis::{
    box_office_over_time, do_for_all, genres_over_career, highest_paid_actor,
    movie_ratings_over_time, Aggregated, ErrorPolicy, RunReport,
};

pub mod charts;
use charts::{Chart, ChartCategory};

mod clients;
use clients::imdb_client::ImdbClient;

pub mod config;
use config::{AnalysisConfig, ScrapeConfig};

pub mod error;
use error::{AggregationError, Result};

mod extractors;

mod fetchers;
use fetchers::filmography_fetcher::FilmographyFetcher;

pub mod model;
use model::table::{ActorColumn, Table};

pub mod persisters;
use persisters::{csv_writer::CsvWriter, json_store::JsonStore};

#[derive(Debug, PartialEq)]
pub struct AnalysisOutcome {
    pub top_earner: String,
    pub reports: Vec<(ChartCategory, RunReport)>,
}

/// Loads the table named in `config`, writes every chart and returns the top earner.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisOutcome> {
    let table = JsonStore::load_table(&config.input)?;
    analyze(&table, &config.output_dir, config.policy)
}

pub fn analyze(table: &Table, output_dir: &Path, policy: ErrorPolicy) -> Result<AnalysisOutcome> {
    let reports = vec![
        (
            ChartCategory::Genres,
            chart_all(
                table,
                output_dir,
                ChartCategory::Genres,
                genres_over_career,
                charts::genres_chart,
                policy,
            )?,
        ),
        (
            ChartCategory::BoxOffice,
            chart_all(
                table,
                output_dir,
                ChartCategory::BoxOffice,
                box_office_over_time,
                charts::box_office_chart,
                policy,
            )?,
        ),
        (
            ChartCategory::Ratings,
            chart_all(
                table,
                output_dir,
                ChartCategory::Ratings,
                movie_ratings_over_time,
                charts::ratings_chart,
                policy,
            )?,
        ),
    ];

    let top_earner = highest_paid_actor(table, policy)
        .inspect_err(|_| log::error!("Finding the highest paid actor stopped"))?;

    Ok(AnalysisOutcome {
        top_earner,
        reports,
    })
}

fn chart_all<T, A, C>(
    table: &Table,
    output_dir: &Path,
    category: ChartCategory,
    aggregate: A,
    to_chart: C,
    policy: ErrorPolicy,
) -> Result<RunReport>
where
    A: Fn(&ActorColumn, usize) -> std::result::Result<T, AggregationError>,
    C: Fn(&Aggregated<'_, T>) -> Chart,
{
    let mut writer = CsvWriter::new(output_dir, category)?;

    let report = do_for_all(
        table,
        aggregate,
        |aggregated, _table| {
            writer
                .save_chart(&to_chart(aggregated), aggregated.index)
                .map(|_| ())
        },
        policy,
    )
    .inspect_err(|_| log::error!("Charting {} stopped", category.dir_name()))?;

    let dir = writer.finish()?;
    log::info!(
        "Wrote {} charts to {} ({} skipped)",
        report.presented.len(),
        dir.display(),
        report.skipped.len()
    );

    Ok(report)
}

/// Scrapes every actor of the configured list and saves the table as JSON.
pub async fn run_scrape(config: &ScrapeConfig) -> Result<Table> {
    let fetcher = FilmographyFetcher::new(ImdbClient::new()?, config.max_movies);
    let table = fetcher.get_table_for_list(&config.list_url).await?;

    JsonStore::save_table(&table, &config.output)?;
    log::info!(
        "Saved {} actors to {}",
        table.len(),
        config.output.display()
    );

    Ok(table)
}
