use anyhow::Result;
use bayesample::bnet::common::setup::parse_configuration_options;
use bayesample::bnet::inference::batch::{run_jobs, Job};
use bayesample::bnet::inference::Method;
use bayesample::bnet::scenarios::ScenarioFactory;
use bayesample::print_section;
use colored::Colorize;

fn main() -> Result<()> {
    let config = parse_configuration_options()?;
    let scenario = ScenarioFactory::new_shared(&config.scenario_name)?;
    let network = scenario.build_network()?;
    let seed = config.seed.unwrap_or_else(rand::random);

    // One job per (query, method), in query-major order
    let specs = scenario.canonical_queries();
    let mut jobs = Vec::new();
    for spec in &specs {
        let query = spec.resolve(&network)?;
        for method in Method::ALL {
            jobs.push(Job {
                query: query.clone(),
                method,
                samples: config.samples_for(spec),
            });
        }
    }
    let results = run_jobs(&network, &jobs, seed);

    print_section!("{} (seed {})", scenario.name(), seed);
    println!(
        "{:<45} {:>12} {:>12} {:>12}",
        "query", "rejection", "weighting", "gibbs"
    );
    for (spec, row) in specs.iter().zip(results.chunks(Method::ALL.len())) {
        let cells: Vec<String> = row
            .iter()
            .map(|outcome| match outcome {
                Ok(estimate) => format!("{:>12.5}", estimate.probability),
                Err(_) => format!("{:>12}", "n/a").red().to_string(),
            })
            .collect();
        println!("{:<45} {}", spec.description, cells.join(" "));
    }
    for outcome in results.iter().filter_map(|r| r.as_ref().err()) {
        if !outcome.is_degenerate() {
            return Err(outcome.clone().into());
        }
    }
    Ok(())
}
