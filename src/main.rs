use masspring::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "chain.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(&scenario_cfg)?;

    let Scenario {
        mut simulation,
        t_end,
        h0,
    } = scenario;

    // The host supplies dt once per step and only reads positions between
    // steps; all physics lives behind Simulation::advance
    let steps = (t_end / h0).ceil() as u64;
    info!("running {steps} steps of {h0} s ({t_end} s total)");

    for step in 0..steps {
        simulation.advance(h0)?;
        if step % 60 == 0 {
            debug!("t = {:.3}", simulation.system().t);
        }
    }

    for (i, p) in simulation.positions().iter().enumerate() {
        println!("particle {i:3}: [{:+.6}, {:+.6}, {:+.6}]", p.x, p.y, p.z);
    }

    //bench_forces();
    //bench_step();
    //bench_step_curve();

    Ok(())
}
