use std::error::Error;
use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Local;

use traffic_router::io::{load_network_config, NetworkConfig};
use traffic_router::monitor::service::TrafficService;
use traffic_router::monitor::unix_timestamp_ms;
use traffic_router::sampling::density::ContourDensityEstimator;
use traffic_router::util::cli_args::parse_arg_optional;
use traffic_router::util::measure;

/// Monitoring loop over a configured network: query a snapshot every second
/// and print the per-segment counts and the current best route.
///
/// Usage: traffic_router [config-path] [rounds]
/// Without a config path the built-in demo network is used; `rounds` 0 runs
/// until interrupted.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path: String = parse_arg_optional(&mut args, String::new());
    let rounds: u64 = parse_arg_optional(&mut args, 30);

    let config = if config_path.is_empty() {
        NetworkConfig::demo()
    } else {
        load_network_config(Path::new(&config_path))?
    };

    let (service, time) = measure(|| {
        TrafficService::from_config(&config, Box::new(ContourDensityEstimator::default()))
    });
    let mut service = service?;
    println!("Service initialized in {} ms", time.as_nanos() as f64 / 1_000_000.0);

    let mut round = 0;
    loop {
        let snapshot = service.graph_data(unix_timestamp_ms());

        println!("\n--- Update at {} ---", Local::now().format("%H:%M:%S"));
        for edge in &snapshot.edges {
            println!("  {} -> {}: {} vehicles", edge.from, edge.to, edge.weight);
        }
        match &snapshot.best_route {
            Some(route) => println!("Best route (least congested): {}", route.join(" -> ")),
            None => println!("No route available between the configured endpoints"),
        }
        println!("Next update in {} s", snapshot.next_update);

        round += 1;
        if rounds > 0 && round >= rounds {
            break;
        }
        thread::sleep(Duration::from_secs(1));
    }

    service.close();
    Ok(())
}
