use bank_certificates_backend::routes;
use bank_certificates_backend::services::auth::AdminAuth;
use bank_certificates_backend::services::store::BankStore;
use dotenv::dotenv;
use log::{error, info, warn};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    // Get port from the environment, default to 3030
    let port_str = env::var("PORT").unwrap_or_else(|_| {
        warn!("$PORT not set, defaulting to 3030");
        "3030".to_string()
    });

    let port: u16 = port_str.parse().expect("PORT must be a number");
    info!("Using PORT: {}", port);

    let data_file =
        env::var("DATA_FILE").unwrap_or_else(|_| "data/bank-certificates.json".to_string());
    info!("Using catalog file: {}", data_file);

    let store = match BankStore::load(&data_file).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to load catalog from {}: {}", data_file, e);
            std::process::exit(1);
        }
    };
    let auth = Arc::new(AdminAuth::from_env());

    // Bind to 0.0.0.0 for container deployments
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    info!("Will bind to: {}", addr);

    // Set up CORS; the admin panel sends its token in the Authorization header
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", "authorization"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    // Set up routes
    let api = routes::routes(store, auth).with(cors);
    info!("Routes configured successfully with CORS.");

    // Start the server
    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
}
