//! Runs every configured scenario and prints one line per measurement.
//!
//! Environment:
//!   VECTORIZED_DOT_SEED      # u64 seed for reproducible vectors
//!   VECTORIZED_DOT_SCENARIO  # small | large | all (default: all)
//!   RUST_LOG                 # log level (default: warn)

use vectorized_dot::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("configuration: {:?}", config);

    let mut source = UniformSource::new(config.seed);
    let clock = MonotonicClock::new();
    let mut sink = ConsoleSink::stdout();

    if let Err(e) = sink.print_header() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = vectorized_dot::run_scenarios(&config, &mut source, &clock, &mut sink) {
        log::error!("run aborted: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Note: Speedup is the scalar loop time divided by the vectorized time.");
}
