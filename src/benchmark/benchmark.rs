use std::time::Instant;

use crate::simulation::kinematics::simulate;
use crate::simulation::params::SimulationParameters;
use crate::simulation::summary::summarize;

/// Time `simulate` + `summarize` for growing drop heights.
/// The grid length scales with sqrt(height), so heights grow quadratically.
pub fn bench_simulate() {
    let heights = [10.0, 100.0, 1_000.0, 10_000.0, 100_000.0, 1_000_000.0];
    let repeats = 20;

    for h in heights {
        let params = SimulationParameters::new(h, 500.0, h / 2.0, 100.0);

        // Warm up
        let Ok(result) = simulate(&params) else {
            println!("height = {h:9.0}, invalid parameters, skipped");
            continue;
        };
        let samples = result.len();

        let t0 = Instant::now();
        for _ in 0..repeats {
            if let Ok(r) = simulate(&params) {
                std::hint::black_box(summarize(&r).ok());
            }
        }
        let dt = t0.elapsed().as_secs_f64() / repeats as f64;

        println!("height = {h:9.0}, samples = {samples:7}, run = {dt:10.6} s");
    }
}
