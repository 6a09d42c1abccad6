use crate::{error::CliError, settings::Settings};
use clap::Parser;
use commands::Commands;
use model::schema::registry::SchemaRegistry;
use planner::{
    filter::{Filter, plan::FilterPlan},
    query::renderer::render,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracker::{bundle::TrackerBundle, validation::validate_bundle};

mod commands;
mod error;
mod output;
mod settings;

#[derive(Parser)]
#[command(
    name = "filterq",
    version = "0.1.0",
    about = "Typed query filters: SQL translation, in-memory evaluation and tracker update checks"
)]
struct Cli {
    #[arg(long, global = true, help = "JSON settings file (default dialect, log filter)")]
    settings: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref())?;

    // RUST_LOG wins over the settings file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Sql {
            schemas,
            root,
            filters,
            dialect,
        } => {
            let dialect = dialect.unwrap_or(settings.dialect);
            info!(%root, %dialect, filters = filters.len(), "Rendering filter query");

            let registry = load_schemas(&schemas)?;
            let plan = FilterPlan::build(&registry, &root, &parse_filters(&filters)?)?;
            let select = plan.select(&registry)?;
            let (sql, params) = render(&select, dialect.dialect().as_ref());

            let params: Vec<_> = params.iter().map(output::to_json).collect();
            output::emit(&json!({ "sql": sql, "params": params }), None)?;
        }
        Commands::Eval {
            schemas,
            root,
            filters,
            rows,
            output,
        } => {
            let registry = load_schemas(&schemas)?;
            let plan = FilterPlan::build(&registry, &root, &parse_filters(&filters)?)?;

            let rows = output::rows_from_json(&root, &std::fs::read_to_string(&rows)?)?;
            let total = rows.len();
            let kept = plan.apply(rows);
            info!(%root, total, kept = kept.len(), "Evaluated filters");

            output::emit(&output::rows_to_json(&kept), output.as_deref())?;
        }
        Commands::Validate { bundle, output } => {
            info!("Validating tracker bundle: {bundle}");

            let bundle = TrackerBundle::from_json(&std::fs::read_to_string(&bundle)?)?;
            let reporter = validate_bundle(&bundle);

            output::emit(&reporter, output.as_deref())?;
            if reporter.has_errors() {
                return Err(CliError::ValidationFailed(reporter.errors().len()));
            }
        }
    }

    Ok(())
}

fn load_schemas(path: &str) -> Result<SchemaRegistry, CliError> {
    let source = std::fs::read_to_string(path)?;
    Ok(SchemaRegistry::from_json(&source)?)
}

fn parse_filters(filters: &[String]) -> Result<Vec<Filter>, CliError> {
    Ok(filters
        .iter()
        .map(|f| Filter::parse(f))
        .collect::<Result<Vec<_>, _>>()?)
}
