use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{
    config::Config,
    error::AppError,
    service::{mail::Mailer, user::UserService},
};

const HTTP_TIMEOUT_SECS: u64 = 10;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outgoing mail.
///
/// # Returns
/// - `reqwest::Client` - Client with a request timeout
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Seeds the first administrator from `ADMIN_EMAIL` and `ADMIN_PASSWORD`.
///
/// Does nothing when either variable is unset or when any user exists.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
/// - `config` - Application configuration holding the admin credentials
/// - `mailer` - Mailer handed to the user service
pub async fn seed_admin(
    db: &DatabaseConnection,
    config: &Config,
    mailer: &dyn Mailer,
) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::debug!("ADMIN_EMAIL or ADMIN_PASSWORD unset, skipping administrator seed");
        return Ok(());
    };

    UserService::new(db, mailer, &config.company_name)
        .seed_admin(email, password)
        .await?;

    Ok(())
}

/// Builds the CORS layer admitting the configured origins.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
