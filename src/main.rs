use anyhow::{bail, Result};
use bandgauge::core::{with_registry, with_registry_mut};
use bandgauge::{plugins, DefinitionFile};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

/// bandgauge - inspect metric, graph, and perfometer definitions
#[derive(Parser, Debug)]
#[command(name = "bandgauge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=warn, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Extra definition files (JSON) loaded after the built-in plugins
    #[arg(short = 'f', long = "definitions", value_name = "FILE")]
    definitions: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered units, metrics, and graphs
    List,
    /// Check every cross-registry reference
    Validate,
    /// Render a value with a registered unit
    Render {
        /// Unit key, e.g. "Mbits/s"
        #[arg(long, value_name = "KEY")]
        unit: String,
        /// Raw value to format
        value: f64,
    },
    /// Dump the whole registry as pretty JSON
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    with_registry_mut(plugins::register_builtins)?;
    for path in &cli.definitions {
        let file = DefinitionFile::load_from_path(path)?;
        with_registry_mut(|registry| file.apply(registry))?;
        info!("Loaded definitions from {}", path.display());
    }

    match cli.command {
        Command::List => list(),
        Command::Validate => validate(),
        Command::Render { unit, value } => render(&unit, value),
        Command::Dump => dump(),
    }
}

fn list() -> Result<()> {
    with_registry(|registry| {
        println!("Units:");
        for key in registry.list_units() {
            if let Some(unit) = registry.unit(&key) {
                println!("  {} ({})", key, unit.title);
            }
        }

        println!("Metrics:");
        for key in registry.list_metrics() {
            if let Some(metric) = registry.metric(&key) {
                println!("  {} ({}, {}, {})", key, metric.title, metric.unit, metric.color);
            }
        }

        println!("Graphs:");
        for key in registry.list_graphs() {
            if let Some(graph) = registry.graph(&key) {
                println!("  {} ({}, {} metrics)", key, graph.title, graph.metrics.len());
            }
        }

        println!("Perfometers: {}", registry.perfometers().len());
    });
    Ok(())
}

fn validate() -> Result<()> {
    match with_registry(|registry| registry.validate()) {
        Ok(()) => {
            println!("All references resolve");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("error: {}", error);
            }
            bail!("registry validation failed with {} error(s)", errors.len());
        }
    }
}

fn render(unit_key: &str, value: f64) -> Result<()> {
    let rendered = with_registry(|registry| registry.unit(unit_key).map(|u| u.render(value)));
    match rendered {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => bail!("Unknown unit: {}", unit_key),
    }
}

fn dump() -> Result<()> {
    let json = with_registry(|registry| serde_json::to_string_pretty(registry))?;
    println!("{}", json);
    Ok(())
}
