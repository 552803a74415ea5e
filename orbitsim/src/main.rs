use orbitsim::{ScenarioConfig, Scenario, OrbitRun};
use orbitsim::{run_2d, run_3d};
use orbitsim::{bench_integrators, bench_convergence_curve};
use orbitsim::simulation::params::SECONDS_PER_DAY;

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "earth.yaml")]
    file_name: String,

    /// Print the report without opening a viewer
    #[arg(long)]
    headless: bool,

    /// Run the integrator benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
}

fn report(run: &OrbitRun) {
    println!("{}: {} samples, dt = {} s", run.title(), run.grid.steps, run.grid.dt);
    println!(
        "perihelion: index {}, {:.4e} m, {:.4e} m/s",
        run.perihelion.index, run.perihelion.distance, run.perihelion.speed
    );
    println!(
        "aphelion: index {} (t = {:.2} days), {:.4e} m, {:.4e} m/s",
        run.aphelion.index,
        run.grid.time_at(run.aphelion.index) / SECONDS_PER_DAY,
        run.aphelion.distance,
        run.aphelion.speed
    );
    println!("{}", run.caption());
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_integrators();
        bench_convergence_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let run = scenario.run().context("simulation failed")?;

    report(&run);

    if args.headless {
        return Ok(());
    }

    if run.dimension == false {
        run_2d(run);
    }
    else {
        run_3d(run);
    }

    Ok(())
}
