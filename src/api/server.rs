use super::handlers;
use crate::BIND_ADDR_DEFAULT;
use crate::SERVER_WORKERS;
use crate::holdem::SolverConfig;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/solve", web::post().to(handlers::solve));
}

/// serve until shutdown on BIND_ADDR, or the default address
#[rustfmt::skip]
pub async fn run(config: SolverConfig) -> Result<(), std::io::Error> {
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| BIND_ADDR_DEFAULT.to_string());
    let config = web::Data::new(config);
    log::info!("solving {} iterations against {} opponent samples", config.iterations, config.samples);
    log::info!("starting server on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(config.clone())
            .configure(routes)
    })
    .workers(SERVER_WORKERS)
    .bind(addr)?
    .run()
    .await
}
