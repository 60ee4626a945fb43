use clap::Parser;

use filmography_stats::{
    analysis::ErrorPolicy,
    config::{AnalysisConfig, Cli, Command, ScrapeConfig},
};

mod logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Command::Analyze {
            input,
            output_dir,
            skip_errors,
        } => {
            let policy = if skip_errors {
                ErrorPolicy::SkipAndContinue
            } else {
                ErrorPolicy::AbortOnFirstError
            };
            filmography_stats::run_analysis(&AnalysisConfig {
                input,
                output_dir,
                policy,
            })
            .map(|outcome| println!("{}", outcome.top_earner))
        }
        Command::Scrape {
            list_url,
            output,
            max_movies,
        } => filmography_stats::run_scrape(&ScrapeConfig {
            list_url,
            output,
            max_movies,
        })
        .await
        .map(|_| ()),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
