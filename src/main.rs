use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use graphql_cypher::{config, Schema, Translator};

/// graphql-cypher - translate GraphQL read queries into Cypher
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SDL schema file with @relation annotations
    #[arg(long)]
    schema: PathBuf,

    /// Query file, or `-` to read the query from stdin
    #[arg(long, default_value = "-")]
    query: String,

    /// JSON object with variable values
    #[arg(long)]
    variables: Option<String>,

    /// YAML configuration file (defaults to GQL_CYPHER_* environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum selection depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Argument name used as page size
    #[arg(long)]
    first_arg: Option<String>,

    /// Argument name used as page start
    #[arg(long)]
    offset_arg: Option<String>,

    /// Only filter on declared arguments
    #[arg(long)]
    no_implicit_filters: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One statement per line, then parameters as JSON when present
    Text,
    /// `{"statements": [...], "parameters": {...}}`
    Json,
}

impl From<&Cli> for config::CliConfig {
    fn from(cli: &Cli) -> Self {
        config::CliConfig {
            max_selection_depth: cli.max_depth,
            first_argument: cli.first_arg.clone(),
            offset_argument: cli.offset_arg.clone(),
            // Only an explicit flag overrides the file or environment
            implicit_field_filters: cli.no_implicit_filters.then_some(false),
        }
    }
}

fn main() {
    // Initialize logger - defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => config::TranslatorConfig::from_yaml_file(path)
            .with_context(|| format!("Configuration error in {}", path.display()))?,
        None => config::TranslatorConfig::from_env().context("Configuration error")?,
    };
    config.merge(cli.into());
    validator::Validate::validate(&config).context("Configuration error")?;

    let schema = Schema::from_sdl_file(&cli.schema)?;
    let query = read_query(&cli.query)?;
    let variables = match &cli.variables {
        Some(text) => match serde_json::from_str::<serde_json::Value>(text)
            .context("--variables is not valid JSON")?
        {
            serde_json::Value::Object(map) => map,
            other => bail!("--variables must be a JSON object, got {}", other),
        },
        None => serde_json::Map::new(),
    };

    let translator = Translator::with_config(schema, config);
    let translation = translator.translate_with_variables(&query, &variables)?;
    log::info!("Translated {} statement(s)", translation.statements.len());

    match cli.format {
        OutputFormat::Text => {
            for statement in &translation.statements {
                println!("{}", statement);
            }
            if !translation.parameters.is_empty() {
                println!("{}", serde_json::to_string_pretty(&translation.parameters)?);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&translation)?),
    }
    Ok(())
}

fn read_query(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut query = String::new();
        std::io::stdin()
            .read_to_string(&mut query)
            .context("Failed to read query from stdin")?;
        Ok(query)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read query file {}", source))
    }
}
