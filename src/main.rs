use library_checkout::{
    adapters::{mock, postgres},
    api::{handlers::AppState, router::create_router},
    application::checkout::ServiceDependencies,
    config::Config,
    ports::LoanRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_checkout=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Initialize adapters
    let loan_repository: Arc<dyn LoanRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = postgres::create_pool(database_url, config.database_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            postgres::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let repository = postgres::PostgresLoanRepository::new(pool);
            for (isbn, copy_id) in &config.seed_copies {
                repository
                    .add_copy(isbn, copy_id)
                    .await
                    .expect("Failed to register seed copy");
            }
            Arc::new(repository)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, loans are kept in memory");
            let repository = mock::LoanRepository::new();
            for (isbn, copy_id) in &config.seed_copies {
                repository.add_copy(isbn.clone(), copy_id.clone());
            }
            Arc::new(repository)
        }
    };
    tracing::info!("Registered {} seed copies", config.seed_copies.len());
    let reminder_service = Arc::new(mock::ReminderService::new());

    let service_deps = ServiceDependencies {
        loan_repository,
        reminder_service,
        reminder_timing: config.reminder_timing,
    };
    tracing::info!("Reminder timing: {}", config.reminder_timing.as_str());

    let app = create_router(Arc::new(AppState { service_deps }));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
