mod analyze;
mod collect;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sov-cli")]
#[command(about = "Share of voice across web and video search results")]
struct Cli {
    /// Brands YAML file (overrides `SOV_BRANDS_PATH`)
    #[arg(long, global = true)]
    brands: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search video and web sources and save the results as JSON
    Collect {
        /// File to write the collected records to
        #[arg(long)]
        output: PathBuf,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Compute share of voice from a saved records file
    Analyze {
        /// JSON array of result records, in rank order
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Collect results and analyze them in one go
    Run {
        #[command(flatten)]
        search: SearchArgs,

        /// Also save the collected records to this file
        #[arg(long)]
        save: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
struct SearchArgs {
    /// Search query (overrides `SOV_QUERY`)
    #[arg(long)]
    query: Option<String>,

    /// Results to keep per source (overrides `SOV_MAX_RESULTS`)
    #[arg(long)]
    max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, clap::Args)]
struct OutputArgs {
    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Brand to report on in detail (overrides the primary brand in the brands file)
    #[arg(long)]
    primary: Option<String>,
}

impl SearchArgs {
    fn to_request(&self, config: &sov_core::AppConfig) -> sov_search::SearchRequest {
        let mut request = sov_search::SearchRequest::from_config(config);
        if let Some(query) = &self.query {
            request.query.clone_from(query);
        }
        if let Some(max_results) = self.max_results {
            request.max_results = max_results.max(1);
        }
        request
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = sov_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let brands_path = cli.brands.unwrap_or_else(|| config.brands_path.clone());

    match cli.command {
        Commands::Collect { output, search } => {
            let request = search.to_request(&config);
            collect::run_collect(&config, &request, &output).await?;
        }
        Commands::Analyze { input, output } => {
            analyze::run_analyze(&config, &brands_path, &input, &output)?;
        }
        Commands::Run {
            search,
            save,
            output,
        } => {
            let request = search.to_request(&config);
            let records = collect::fetch_records(&config, &request).await?;
            if let Some(path) = save {
                sov_core::save_records(&path, &records)?;
                tracing::info!(
                    path = %path.display(),
                    count = records.len(),
                    "saved collected records"
                );
            }
            analyze::analyze_and_print(
                &config,
                &brands_path,
                &records,
                Some(request.query.as_str()),
                &output,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
