use crate::{
    action::{ActionMeta, ActionRegistry},
    restful::{HyphenatedName, RestfulRouter, RestfulStrategy, SegmentKind},
    runtime_config::RouterConfig,
};
use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use http::Method;
use serde::Serialize;
use std::path::PathBuf;

/// Command-line interface for the RESTful router
///
/// Runs forward and reverse conversions against a router built from
/// configuration, for checking how paths will be routed.
#[derive(Parser)]
#[command(name = "restroute")]
#[command(about = "RESTful path router CLI", long_about = None)]
pub struct Cli {
    /// Router configuration file (YAML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the routing strategy (numeric, pair)
    #[arg(long, global = true)]
    pub strategy: Option<RestfulStrategy>,

    /// Enable the virtual list marker for GET requests
    #[arg(long, global = true, default_value_t = false)]
    pub virtual_list: bool,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show whether a path is RESTful and how its segments classify
    Classify {
        /// Request path (e.g. /products/1/purchases/)
        path: String,
    },
    /// Convert a request path to its action mapping path
    Forward {
        /// Request path (e.g. /products/1/purchases/)
        path: String,

        /// HTTP method of the request
        #[arg(short, long, default_value = "GET")]
        method: String,
    },
    /// Convert a generated action URL to its RESTful form
    Reverse {
        /// Logical action URL (e.g. /products/purchases/1/?sort=asc)
        url: String,

        /// Action name to look up in the registry
        #[arg(short, long, requires = "actions")]
        action: Option<String>,

        /// Action registry file (YAML)
        #[arg(long)]
        actions: Option<PathBuf>,

        /// Business element count when no registry is used
        #[arg(short = 'n', long, conflicts_with = "action")]
        business_elements: Option<usize>,

        /// Hyphenated resource alias (repeatable, e.g. ballet-dancers)
        #[arg(long = "hyphenate", conflicts_with = "action")]
        hyphenate: Vec<String>,

        /// Hyphenated event keyword alias (repeatable, e.g. sales-history)
        #[arg(long = "event-hyphenate", conflicts_with = "action")]
        event_hyphenate: Vec<String>,
    },
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    path: &'a str,
    restful: bool,
    kinds: Vec<SegmentKind>,
}

#[derive(Serialize)]
struct ReverseOutput<'a> {
    action: &'a str,
    action_url: &'a str,
    restful_url: Option<String>,
}

/// Build the router for a parsed command line.
pub fn build_router(cli: &Cli) -> anyhow::Result<RestfulRouter> {
    let config = RouterConfig::load(cli.config.as_deref())?;
    router_with_overrides(cli, config)
}

/// Apply `--strategy` and `--virtual-list` on top of loaded configuration.
pub(crate) fn router_with_overrides(cli: &Cli, mut config: RouterConfig) -> anyhow::Result<RestfulRouter> {
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.virtual_list {
        config.virtual_list_handling = true;
    }
    RestfulRouter::from_config(&config)
}

/// Execute a parsed command line and return what it prints.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let router = build_router(cli)?;
    execute_with(cli, &router)
}

/// Execute a parsed command line against an already built router.
pub(crate) fn execute_with(cli: &Cli, router: &RestfulRouter) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Classify { path } => {
            let kinds = router.segment_kinds(path);
            let output = ClassifyOutput {
                path,
                restful: kinds.is_some(),
                kinds: kinds.unwrap_or_default(),
            };
            if cli.json {
                return Ok(serde_json::to_string(&output)?);
            }
            if !output.restful {
                return Ok(format!("{path}: not restful"));
            }
            let kinds: Vec<&str> = output.kinds.iter().map(|k| kind_label(*k)).collect();
            Ok(format!("{path}: restful [{}]", kinds.join(", ")))
        }
        Commands::Forward { path, method } => {
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
                .map_err(|_| anyhow!("Invalid HTTP method '{method}'"))?;
            let mapping = router.to_mapping(path, &method);
            if cli.json {
                return Ok(serde_json::to_string(&mapping)?);
            }
            Ok(match mapping.restful_path() {
                Some(mapped) => format!("{path} -> {mapped}"),
                None => format!("{path}: not restful"),
            })
        }
        Commands::Reverse {
            url,
            action,
            actions,
            business_elements,
            hyphenate,
            event_hyphenate,
        } => {
            let meta = resolve_action(
                action.as_deref(),
                actions.as_ref(),
                *business_elements,
                hyphenate,
                event_hyphenate,
            )?;
            let restful_url = router.to_restful_url(url, &meta);
            if cli.json {
                let output = ReverseOutput {
                    action: &meta.name,
                    action_url: url,
                    restful_url,
                };
                return Ok(serde_json::to_string(&output)?);
            }
            Ok(match restful_url {
                Some(restful) => format!("{url} -> {restful}"),
                None => format!("{url}: not applicable"),
            })
        }
    }
}

/// Parse the command line, execute it and print the result.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

fn resolve_action(
    action: Option<&str>,
    actions: Option<&PathBuf>,
    business_elements: Option<usize>,
    hyphenate: &[String],
    event_hyphenate: &[String],
) -> anyhow::Result<ActionMeta> {
    if let Some(name) = action {
        let path = actions.ok_or_else(|| anyhow!("--action requires --actions <FILE>"))?;
        let registry = ActionRegistry::from_file(path)?;
        return registry
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("Action '{name}' not found in {}", path.display()));
    }
    let Some(count) = business_elements else {
        bail!("Either --action or --business-elements is required");
    };
    Ok(ActionMeta::new("cli", count)
        .with_hyphenated_names(parse_names(hyphenate).context("Invalid --hyphenate value")?)
        .with_event_suffix_hyphenated_names(
            parse_names(event_hyphenate).context("Invalid --event-hyphenate value")?,
        ))
}

fn parse_names(values: &[String]) -> anyhow::Result<Vec<HyphenatedName>> {
    values
        .iter()
        .map(|v| HyphenatedName::new(v.as_str()).map_err(anyhow::Error::from))
        .collect()
}

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::ResourceName => "resource",
        SegmentKind::Identifier => "identifier",
        SegmentKind::EventSuffix => "event",
    }
}
