use log::info;
use rockets::control::scenario::launch_world;
use rockets::*;
use std::env;

const SIMULATED_SECONDS: u32 = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = SimulationOptions::default();
    let mut world = launch_world(LAUNCH_FUEL_CELLS)?;
    let mut pacer = FixedTimestep::new();
    let mut telemetry = Telemetry::new();

    info!(
        "Simulation dt is {:.2} ms, {} ticks per fuel stage",
        options.time_step() * 1000.0,
        options.steps_per_stage()
    );

    telemetry.collect_data(&world);
    for second in 1..=SIMULATED_SECONDS {
        // Nudge past the boundary so the last tick of each second fits
        let elapsed = f64::from(second) + options.time_step() / 2.0;
        pacer.catch_up(&options, &mut world, elapsed);
        telemetry.collect_data(&world);
    }

    telemetry.display_data();
    info!(
        "Simulation ended after {} steps ({:.2} s)",
        world.steps(),
        world.world_time()
    );

    Ok(())
}
