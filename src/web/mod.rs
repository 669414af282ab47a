mod handlers;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Register the JSON API routes on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(1024 * 1024))
        .route("/api/defaults", web::get().to(handlers::defaults))
        .route("/api/products", web::get().to(handlers::products))
        .route("/api/fields", web::get().to(handlers::fields))
        .route("/api/evaluate", web::post().to(handlers::evaluate_scenario));
}

/// Run the stateless evaluation API until the process is stopped.
pub async fn start_server(host: &str, port: u16) -> std::io::Result<()> {
    info!(host, port, "starting farm calculator API");
    println!("Starting Integrated Farm Calculator API on http://{host}:{port}");

    HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
