mod auth;
mod config;
#[cfg(not(feature = "error_reporting"))]
mod dummy_sentry;
mod errors;
mod routes;

use std::io;

use actix_web::{middleware, web, App, HttpServer};

#[cfg(not(feature = "error_reporting"))]
use dummy_sentry::Sentry;
#[cfg(feature = "error_reporting")]
use sentry_actix::Sentry;

use config::Config;

#[cfg(feature = "error_reporting")]
fn init_error_reporting() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok()?;

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(feature = "error_reporting")]
    let _guard = init_error_reporting();
    #[cfg(feature = "error_reporting")]
    let error_reporting = _guard.is_some();
    #[cfg(not(feature = "error_reporting"))]
    let error_reporting = false;

    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "serving proxy {} on {}",
        config.proxy_ip,
        config.bind_address
    );

    let bind_address = config.bind_address.clone();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Condition::new(error_reporting, Sentry::new()))
            .wrap(routes::cors())
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .configure(routes::config)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
