use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;

use pegawai_backend::config::Config;
use pegawai_backend::utils::storage::UploadStore;
use pegawai_backend::{configure_app, db};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config =
        Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    // Initialize the database pool and create missing tables
    let pool = db::create_pool(&config)
        .await
        .map_err(|err| io::Error::other(format!("Failed to connect to the database: {}", err)))?;
    db::init_schema(&pool)
        .await
        .map_err(|err| io::Error::other(format!("Failed to create tables: {}", err)))?;
    info!("Connected to the database at {}", config.database_url);

    let uploads = UploadStore::new(config.upload_dir.clone(), config.max_upload_size);
    uploads.init().await?;
    info!("Storing uploads in {}", uploads.dir().display());

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure_app(pool.clone(), uploads.clone()))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
