use anyhow::{anyhow, Context, Result};
use clap::{builder::EnumValueParser, Arg, ArgMatches, Command, ValueEnum};
use env_logger::{Builder, Env};
use serde::Deserialize;
use std::io::Write;

use crate::bnet::common::interface::QuerySpec;
use crate::bnet::inference::Method;

/// Samples per query for an ad-hoc `--query` when `--samples` is absent.
pub const DEFAULT_QUERY_SAMPLES: usize = 10_000;

/// Which inference algorithm(s) to run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum MethodSelection {
    #[serde(rename = "rejection")]
    Rejection,
    #[serde(rename = "likelihood-weighting")]
    LikelihoodWeighting,
    #[serde(rename = "gibbs")]
    Gibbs,
    /// Run all three, one after the other.
    #[serde(rename = "all")]
    All,
}

impl MethodSelection {
    pub fn methods(self) -> Vec<Method> {
        match self {
            MethodSelection::Rejection => vec![Method::Rejection],
            MethodSelection::LikelihoodWeighting => vec![Method::LikelihoodWeighting],
            MethodSelection::Gibbs => vec![Method::Gibbs],
            MethodSelection::All => Method::ALL.to_vec(),
        }
    }
}

/// These options define the inputs from the user.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    pub scenario_name: String,
    pub method: MethodSelection,
    /// Overrides the scenario's suggested sample counts when set.
    pub samples: Option<usize>,
    pub seed: Option<u64>,
    pub query: Option<String>,
    pub evidence: Vec<(String, bool)>,
    pub prior_samples: usize,
    pub report_file: Option<String>,
}

impl CommandLineOptions {
    /// `--samples` when given, otherwise the count suggested with the query.
    pub fn samples_for(&self, spec: &QuerySpec) -> usize {
        self.samples.unwrap_or(spec.samples)
    }
}

impl Default for CommandLineOptions {
    fn default() -> Self {
        CommandLineOptions {
            scenario_name: "wet_grass".to_string(),
            method: MethodSelection::All,
            samples: None,
            seed: None,
            query: None,
            evidence: Vec::new(),
            prior_samples: 5,
            report_file: None,
        }
    }
}

/// Initialises `env_logger` with an `info` default and `LEVEL [file:line] message` lines.
fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .init();
}

pub fn build_command() -> Command {
    Command::new("BAYESAMPLE")
        .version("0.1")
        .about("Approximate inference on small Bayesian networks by sampling.")
        .arg(
            Arg::new("scenario_name")
                .long("scenario_name")
                .value_name("STRING")
                .help("Network to build: wet_grass, sprinkler or two_node_chain")
                .default_value("wet_grass"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .value_parser(EnumValueParser::<MethodSelection>::new())
                .help("Inference method to run")
                .default_value("all"),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .value_name("NUMBER")
                .help("Number of samples per query (defaults to each canonical query's own count, 10000 for --query)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NUMBER")
                .help("Seed for the random number generator (optional)"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .value_name("NAME")
                .help("Query node; without it the scenario's canonical queries run"),
        )
        .arg(
            Arg::new("evidence")
                .long("evidence")
                .value_name("NAME=BOOL,...")
                .help("Observed nodes for --query, e.g. WetGrass=true,PlayOutside=false")
                .requires("query"),
        )
        .arg(
            Arg::new("prior_samples")
                .long("prior_samples")
                .value_name("NUMBER")
                .help("Number of joint samples to print before inference")
                .default_value("5"),
        )
        .arg(
            Arg::new("report_file")
                .long("report_file")
                .value_name("FILE")
                .help("Writes a JSON report of every estimate (optional)"),
        )
}

/// Parses `Name=true,Other=false` into name/value pairs.
pub fn parse_evidence(text: &str) -> Result<Vec<(String, bool)>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (name, value) = part
                .split_once('=')
                .ok_or_else(|| anyhow!("evidence '{}' is not of the form NAME=BOOL", part))?;
            let value: bool = value
                .trim()
                .parse()
                .with_context(|| format!("evidence '{}' needs true or false", part))?;
            Ok((name.trim().to_string(), value))
        })
        .collect()
}

fn parse_number<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(name)
        .map(|v| {
            v.parse::<T>()
                .with_context(|| format!("{} needs to be a non-negative integer, got '{}'", name, v))
        })
        .transpose()
}

pub fn options_from_matches(matches: &ArgMatches) -> Result<CommandLineOptions> {
    let defaults = CommandLineOptions::default();
    let scenario_name = matches
        .get_one::<String>("scenario_name")
        .cloned()
        .unwrap_or(defaults.scenario_name);
    let method = matches
        .get_one::<MethodSelection>("method")
        .copied()
        .unwrap_or(defaults.method);
    let evidence = match matches.get_one::<String>("evidence") {
        Some(text) => parse_evidence(text)?,
        None => Vec::new(),
    };

    Ok(CommandLineOptions {
        scenario_name,
        method,
        samples: parse_number(matches, "samples")?,
        seed: parse_number(matches, "seed")?,
        query: matches.get_one::<String>("query").cloned(),
        evidence,
        prior_samples: parse_number(matches, "prior_samples")?.unwrap_or(defaults.prior_samples),
        report_file: matches.get_one::<String>("report_file").cloned(),
    })
}

/// Sets up logging and reads the options from the process arguments.
pub fn parse_configuration_options() -> Result<CommandLineOptions> {
    init_logging();
    options_from_matches(&build_command().get_matches())
}
