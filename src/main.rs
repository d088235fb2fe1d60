mod config;
mod rpc;
mod web;

use actix_web::{App, HttpServer, web::Data};
use dotenv::dotenv;
use log::{info, error};
use std::sync::Arc;

use config::GatewayConfig;
use rpc::{AgentFacade, HttpInvoker, RagFacade, RemoteInvoker};
use web::routes;

// App state structure
pub struct AppState {
    pub agent: AgentFacade,
    pub rag: RagFacade,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting patent gateway");

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // One transport for both remote services, shared by the facades
    let invoker: Arc<dyn RemoteInvoker> = match HttpInvoker::new(&config) {
        Ok(invoker) => Arc::new(invoker),
        Err(e) => {
            error!("Failed to build remote service client: {:#}", e);
            std::process::exit(1);
        }
    };

    let app_state = Data::new(AppState {
        agent: AgentFacade::new(invoker.clone()),
        rag: RagFacade::new(invoker),
    });

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
