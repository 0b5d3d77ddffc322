mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::sos::CountryCode;
use database::JsonStore;
use services::sms_service::Fast2Sms;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let data_path = env::var("DATA_PATH").unwrap_or_else(|_| "data.json".to_string());

    // Fail fast without the SMS credential
    let fast2sms_key = env::var("FAST2SMS_API_KEY")
        .expect("FAST2SMS_API_KEY must be set");
    let country_code = env::var("WHATSAPP_COUNTRY_CODE").unwrap_or_else(|_| "91".to_string());

    log::info!("🚀 Starting Safety Service...");
    log::info!("🗄️  Database: {}", data_path);

    let store = JsonStore::open(&data_path)
        .unwrap_or_else(|e| panic!("Failed to open database: {}", e));

    let store_data = web::Data::new(store);
    let sms_data = web::Data::new(Fast2Sms::new(fast2sms_key));
    let country_data = web::Data::new(CountryCode(country_code));

    log::info!("✅ Database ready");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Frontend is a static page opened from anywhere, CORS stays open
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .app_data(sms_data.clone())
            .app_data(country_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Application endpoints
            .service(
                web::scope("/api")
                    // Accounts
                    .route("/signup", web::post().to(api::auth::signup))
                    .route("/login", web::post().to(api::auth::login))
                    // Emergency contacts (wholesale replace + list)
                    .route("/contacts", web::post().to(api::contacts::save_contacts))
                    .route(
                        "/contacts/{user_id}",
                        web::get().to(api::contacts::list_contacts),
                    )
                    // SOS dispatch
                    .route("/sos", web::post().to(api::sos::raise_sos))
                    .route("/sos/whatsapp", web::post().to(api::sos::whatsapp_links))
                    .route("/alerts/{user_id}", web::get().to(api::alerts::list_alerts))
                    // Live location stream
                    .route("/location", web::post().to(api::location::update_location)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
