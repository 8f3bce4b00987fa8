use anyhow::{Context, Result};
use bayesample::bnet::common::interface::QuerySpec;
use bayesample::bnet::common::report::{write_reports, QueryReport};
use bayesample::bnet::common::setup::{parse_configuration_options, DEFAULT_QUERY_SAMPLES};
use bayesample::bnet::scenarios::wet_grass::play_outside_probabilities;
use bayesample::bnet::scenarios::ScenarioFactory;
use bayesample::{print_estimate, print_section, print_warning};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;

fn main() -> Result<()> {
    let config = parse_configuration_options()?;
    let scenario = ScenarioFactory::new_shared(&config.scenario_name)?;
    let network = scenario
        .build_network()
        .with_context(|| format!("Failed to build scenario '{}'", config.scenario_name))?;
    info!("built '{}' with {} nodes", scenario.name(), network.len());

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    if scenario.name() == "wet_grass" {
        let play = play_outside_probabilities()?;
        println!("When it is raining, I play outside {:.5}% of the time.", play[0] * 100.0);
        println!("When it is not raining, I play outside {:.5}% of the time.", play[1] * 100.0);
    }

    // Sample some states from the joint distribution and print them
    if config.prior_samples > 0 {
        print_section!("Prior samples");
        for _ in 0..config.prior_samples {
            let sample = network.prior_sample(&mut rng)?;
            println!("{}", network.render_state(&sample));
        }
    }

    let queries = match &config.query {
        Some(target) => {
            let evidence: Vec<(&str, bool)> =
                config.evidence.iter().map(|(n, v)| (n.as_str(), *v)).collect();
            vec![QuerySpec::new(target, target, &evidence, DEFAULT_QUERY_SAMPLES)]
        }
        None => scenario.canonical_queries(),
    };

    let mut reports = Vec::new();
    for method in config.method.methods() {
        print_section!("{}", method);
        let sampler = method.sampler();
        for spec in &queries {
            let query = spec.resolve(&network)?;
            let samples = config.samples_for(spec);
            let outcome = sampler.estimate(&network, &query, samples, &mut rng);
            match &outcome {
                Ok(estimate) => print_estimate!(query.describe(&network), estimate.probability),
                Err(e) if e.is_degenerate() => print_warning!("{}: {}", query.describe(&network), e),
                Err(e) => return Err(e.clone().into()),
            }
            reports.push(QueryReport::new(
                scenario.name(),
                &network,
                &query,
                method,
                samples,
                seed,
                &outcome,
            ));
        }
    }

    if let Some(path) = &config.report_file {
        write_reports(Path::new(path), &reports)
            .with_context(|| format!("Failed to write report to {}", path))?;
        info!("wrote {} estimate(s) to {}", reports.len(), path);
    }

    Ok(())
}
