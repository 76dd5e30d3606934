use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;

use runai_backend::routes;
use runai_backend::services::randomness::RandomSource;
use runai_backend::storage::{DatabaseStorage, MemoryStorage, Storage};
use runai_backend::utils::config::{Config, StorageBackend};
use runai_backend::utils::db::{establish_connection, prepare_schema};

async fn build_storage(config: &Config) -> anyhow::Result<Arc<dyn Storage>> {
    match (config.storage_backend, config.database_url.as_deref()) {
        (StorageBackend::Database, Some(url)) => {
            print!("🔌 Connecting to database... ");
            let db = establish_connection(url)
                .await
                .context("Failed to connect to database")?;
            println!("✅ Connected!");

            prepare_schema(&db)
                .await
                .context("Failed to prepare database schema")?;
            log::info!("Database schema ready");

            Ok(Arc::new(DatabaseStorage::new(db)))
        }
        _ => {
            log::info!("Using seeded in-memory storage");
            Ok(Arc::new(MemoryStorage::seeded()))
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file FIRST before anything else
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=================================================");
    println!("🏃 RunAI Coach Backend Server");
    println!("=================================================");

    let config = Config::from_env().context("Failed to load configuration")?;
    let host = config.host.clone();
    let port = config.port;

    println!("📝 Configuration loaded:");
    println!(
        "   - Storage: {}",
        match config.storage_backend {
            StorageBackend::Memory => "in-memory",
            StorageBackend::Database => "database",
        }
    );
    if let Some(url) = &config.database_url {
        println!("   - Database: {}", url.split('@').last().unwrap_or("***"));
    }
    println!("   - Host: {}", host);
    println!("   - Port: {}", port);
    println!(
        "   - Random seed: {}",
        config
            .random_seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "entropy".to_string())
    );

    let storage = build_storage(&config).await?;
    let random = web::Data::new(RandomSource::from_optional_seed(config.random_seed));

    println!("🌐 Starting HTTP server at http://{}:{}", host, port);
    println!("📍 Available endpoints:");
    println!("   - GET  http://{}:{}/api/health", host, port);
    println!("   - POST http://{}:{}/api/auth/register", host, port);
    println!("   - POST http://{}:{}/api/auth/login", host, port);
    println!("   - GET  http://{}:{}/api/profile/{{userId}}", host, port);
    println!("   - POST http://{}:{}/api/stress", host, port);
    println!("   - POST http://{}:{}/api/training-plans/generate", host, port);
    println!("   - GET  http://{}:{}/api/workouts", host, port);
    println!("   - GET  http://{}:{}/api/challenges", host, port);
    println!("   - GET  http://{}:{}/api/leaderboard", host, port);
    println!("=================================================");

    log::info!("Server started at http://{}:{}", host, port);

    let frontend_url = config.frontend_url.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin(&frontend_url)
            .allowed_methods(vec!["GET", "POST", "PATCH", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .app_data(web::Data::from(storage.clone()))
            .app_data(random.clone())
            .wrap(Logger::default())
            .wrap(cors) // CORS must be wrapped AFTER Logger to ensure headers are added to all responses
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
