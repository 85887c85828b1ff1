use std::path::{Path, PathBuf};

use log::info;
use simple_logger::SimpleLogger;

use projectile_simulation::configuration::config::load_scenario;
use projectile_simulation::telemetry_system::{export, plot};
use projectile_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    // An optional argument points at a JSON scenario file; without one the
    // canonical launch scenario runs.
    let composer = match std::env::args().nth(1) {
        Some(path) => {
            let mut composer = MultiBodyComposer::new();
            for body in load_scenario(Path::new(&path))? {
                composer.add_body(body);
            }
            composer
        }
        None => ScenarioFactory::create_launch_scenario(),
    };

    let results = composer.run_all()?;

    let out_dir = PathBuf::from(".");
    for (name, series) in &results {
        series.summary().log(name);
        export::export_series(&out_dir, name, series)?;
        plot::plot_timeline(
            &out_dir.join(format!("{}_timeline.svg", name)),
            name,
            series,
        )?;
    }

    info!("exported series and charts for {} bodies", results.len());
    Ok(())
}
