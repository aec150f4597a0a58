use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use hospital_server::{api, health_check, AppState, AppError, Settings};
use dotenv::dotenv;
use std::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[actix_web::main]
async fn main() -> hospital_server::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();

    // Load configuration
    let config = Settings::new()?;
    info!("Configuration loaded successfully");

    info!("Starting server at {}:{}", config.server.host, config.server.port);

    // Establish the shared database session; an unreachable database aborts
    // startup here with the driver's diagnostic
    let state = AppState::new(config.clone()).await?;
    let state = web::Data::new(state);

    // Create and bind TCP listener
    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Hospital records API ready at http://{}:{}/api",
        config.server.host, config.server.port
    );

    let workers = config.server.workers as usize;
    let cors_settings = config.cors.clone();
    let app_state = state.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = if cors_settings.enabled {
            let cors_config = Cors::default();

            // Apply specific CORS rules based on configuration
            let cors_config = if cors_settings.allow_any_origin {
                cors_config
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            } else {
                // More restrictive CORS for production use
                cors_config
                    .allowed_origin("http://localhost:8000")
                    .allowed_origin("http://127.0.0.1:5500")
                    .allowed_origin("http://localhost:5500")
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                    .allowed_headers(vec!["Authorization", "Content-Type"])
                    .supports_credentials()
            };

            // Set max age
            cors_config.max_age(cors_settings.max_age as usize)
        } else {
            // CORS disabled - use most restrictive settings
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .route("/health", web::get().to(health_check))
            .route("/api/patients", web::get().to(api::handlers::list_patients))
            .route("/api/patients/count", web::get().to(api::handlers::count_patients))
            .route("/api/doctors", web::get().to(api::handlers::list_doctors))
            .route("/api/doctors/count", web::get().to(api::handlers::count_doctors))
            .route("/api/appointments", web::get().to(api::handlers::list_appointments))
            .route("/api/appointments/count", web::get().to(api::handlers::count_appointments))
            .route("/api/consultations", web::get().to(api::handlers::list_consultations))
            .route("/api/consultations/{id}", web::get().to(api::handlers::get_consultation))
    })
    .listen(listener)?
    .workers(workers)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    // Release the database session once the server loop has returned
    state.shutdown().await?;

    Ok(())
}
