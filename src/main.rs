use statfin_table::application::use_cases::classifier::QueryClassifier;
use statfin_table::application::use_cases::highlight::HighlightRule;
use statfin_table::application::use_cases::parser::DatasetParser;
use statfin_table::application::use_cases::table_builder::{DatasetEndpoints, TableBuilder};
use statfin_table::domain::error::Result;
use statfin_table::infrastructure::config::StatfinConfig;
use statfin_table::infrastructure::pxweb::PxWebClient;
use statfin_table::infrastructure::query_store::load_query_pair;
use statfin_table::interfaces::render::render_table;
use std::io::IsTerminal;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "Failed to build table");
        eprintln!("Error loading data. Please try again later.");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = StatfinConfig::load()?;
    let progressive = std::env::args().any(|arg| arg == "--progressive");

    let (a, b) = load_query_pair(
        &config.population_query_file,
        &config.employment_query_file,
    )
    .await?;

    let client = PxWebClient::with_timeout(config.request_timeout_secs)?;
    let builder = TableBuilder::new(
        &client,
        QueryClassifier::from_config(
            config.population_dimension.clone(),
            config.population_value.clone(),
            config.employment_dimensions.clone(),
        ),
        DatasetParser::new(config.region_dimension.clone()),
        DatasetEndpoints {
            population_url: config.population_url.clone(),
            employment_url: config.employment_url.clone(),
        },
    );

    let rows = if progressive {
        builder.build_progressive(a, b).await?
    } else {
        builder.build(a, b).await?
    };

    let rule = HighlightRule::from_config(config.highlight_above, config.highlight_below);
    print!(
        "{}",
        render_table(&rows, &rule, std::io::stdout().is_terminal())
    );
    Ok(())
}
