#[macro_use]
extern crate rocket;

use std::error::Error;
use std::path::Path;
use std::sync::Mutex;

use rocket::fs::FileServer;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use traffic_router::graph::Weight;
use traffic_router::io::{load_network_config, NetworkConfig};
use traffic_router::monitor::service::TrafficService;
use traffic_router::monitor::snapshot::GraphSnapshot;
use traffic_router::monitor::unix_timestamp_ms;
use traffic_router::sampling::density::ContourDensityEstimator;
use traffic_router::util::cli_args::parse_arg_optional;

struct ServiceState(Mutex<TrafficService>);

#[derive(Serialize)]
struct RouteResponse {
    route: Vec<String>,
    total_weight: Weight,
}

/// The one read operation of the engine. Refreshes as a side effect when the
/// debounce window has elapsed.
#[get("/api/graph_data")]
fn graph_data(state: &State<ServiceState>) -> Json<GraphSnapshot> {
    let mut service = state.0.lock().unwrap();
    Json(service.graph_data(unix_timestamp_ms()))
}

/// Ad-hoc routing between two labelled nodes. 404 when a label is unknown or
/// no path exists; no fallback route is invented here.
#[get("/api/route?<from>&<to>")]
fn route(state: &State<ServiceState>, from: &str, to: &str) -> Result<Json<RouteResponse>, Status> {
    let mut service = state.0.lock().unwrap();
    service
        .route_between(from, to, unix_timestamp_ms())
        .map(|(route, total_weight)| Json(RouteResponse { route, total_weight }))
        .ok_or(Status::NotFound)
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config_path: String = {
        let mut args = std::env::args().skip(1);
        parse_arg_optional(&mut args, String::new())
    };

    let config = if config_path.is_empty() {
        NetworkConfig::demo()
    } else {
        load_network_config(Path::new(&config_path))?
    };

    let service = TrafficService::from_config(&config, Box::new(ContourDensityEstimator::default()))?;
    log::info!(
        "serving {} segments, route {} -> {}",
        config.segments.len(),
        config.route.source,
        config.route.target
    );

    let mut rocket = rocket::build()
        .manage(ServiceState(Mutex::new(service)))
        .mount("/", routes![graph_data, route]);
    if Path::new("frontend").is_dir() {
        rocket = rocket.mount("/", FileServer::from("frontend"));
    }

    // launch returns after graceful shutdown (ctrl-c included); release the
    // frame sources before exiting
    let rocket = rocket.launch().await?;
    if let Some(state) = rocket.state::<ServiceState>() {
        state.0.lock().unwrap().close();
    }

    Ok(())
}
