use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use config::{Config, ConfigError, Environment, File};
use pushkind_common::db::establish_connection_pool;
use pushkind_common::models::config::CommonServerConfig;
use tera::Tera;

use pushkind_categories::models::config::ServerConfig;
use pushkind_categories::repository::DieselRepository;
use pushkind_categories::routes;

fn load_config() -> Result<ServerConfig, ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

fn startup_error(message: String) -> std::io::Error {
    log::error!("{message}");
    std::io::Error::other(message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = load_config()
        .map_err(|e| startup_error(format!("Failed to load configuration: {e}")))?;

    if server_config.secret.len() < 64 {
        return Err(startup_error(
            "Configured secret must be at least 64 bytes long".into(),
        ));
    }
    let secret_key = Key::from(server_config.secret.as_bytes());

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(|e| startup_error(format!("Failed to establish database connection: {e:?}")))?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&format!("{}/**/*", server_config.templates_dir))
        .map_err(|e| startup_error(format!("Template parsing error(s): {e}")))?;

    let common_config = web::Data::new(CommonServerConfig {
        auth_service_url: server_config.auth_service_url.clone(),
        secret: server_config.secret.clone(),
    });

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting categories service on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(middleware::Logger::default())
            .app_data(routes::json_config())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .app_data(common_config.clone())
            .service(Files::new("/assets", &server_config.static_dir))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
