use coastersim::{ScenarioConfig, Scenario, Overrides, RadiusPolicy, SimulationResult, Summary};
use coastersim::bench_simulate;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Roller coaster descent-and-loop kinematics")]
struct Args {
    /// Scenario YAML, a bare name is looked up in `scenarios/`
    #[arg(short, long)]
    file_name: Option<String>,

    /// Initial height (m)
    #[arg(long)]
    height: Option<f64>,

    /// Cart mass (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Loop radius (m)
    #[arg(long)]
    radius: Option<f64>,

    /// Track length (m)
    #[arg(long)]
    track_length: Option<f64>,

    /// Clamp instead of rejecting a loop radius above the drop height
    #[arg(long)]
    clamp: bool,

    /// Write the full series and summary to this YAML file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Run the timing benchmark and exit
    #[arg(long)]
    bench: bool,
}

#[derive(Serialize)]
struct Export<'a> {
    summary: &'a Summary,
    series: &'a SimulationResult,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = Path::new(file_name);
    if direct.exists() {
        return direct.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn build_scenario(args: &Args) -> Result<Scenario> {
    let overrides = Overrides {
        height: args.height,
        mass: args.mass,
        radius: args.radius,
        track_length: args.track_length,
        radius_policy: args.clamp.then_some(RadiusPolicy::Clamp),
    };

    match &args.file_name {
        Some(name) => Ok(Scenario::build_scenario(load_scenario_from_yaml(name)?).apply(overrides)),
        None => match Scenario::from_overrides(overrides) {
            Some(s) => Ok(s),
            None => bail!(
                "--height, --mass, --radius and --track-length are required without -f"
            ),
        },
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.bench {
        bench_simulate();
        return Ok(());
    }

    let scenario = build_scenario(&args)?;
    info!(parameters = ?scenario.parameters, "running simulation");

    let (result, summary) = scenario.run().context("simulation failed")?;
    info!(
        samples = result.len(),
        end = ?result.position(result.len().saturating_sub(1)),
        "simulation complete"
    );

    print!("{summary}");

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_yaml::to_writer(BufWriter::new(file), &Export { summary: &summary, series: &result })
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "series exported");
    }

    Ok(())
}
