use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use staff_manager_api::api::{self, state::AppState};
use staff_manager_api::config::AppConfig;
use staff_manager_api::infrastructure::repositories::{
    PostgresDepartmentRepository, PostgresEmployeeRepository, PostgresLeaveRequestRepository,
    PostgresSalaryRepository, PostgresUserRepository,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    let state = AppState::new(
        &config,
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresEmployeeRepository::new(pool.clone())),
        Arc::new(PostgresDepartmentRepository::new(pool.clone())),
        Arc::new(PostgresLeaveRequestRepository::new(pool.clone())),
        Arc::new(PostgresSalaryRepository::new(pool)),
    );

    let app = api::router(state);

    // Start server
    let addr = config.bind_addr;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
