use crate::server::{config::Config, error::AppError};

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

/// Creates the bootstrap admin account unless it already exists.
///
/// The account receives every role so that a fresh database can be administered
/// without touching it directly. An existing account with the configured username is
/// left as is.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
/// - `config` - Application configuration containing the admin credentials
///
/// # Returns
/// - `Ok(())` - The admin account exists
/// - `Err(AppError)` - Hashing or database error while creating the account
pub async fn ensure_admin_user(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    use crate::server::{middleware::auth::Permission, service::user::UserService};

    let roles = [
        Permission::OwnerAdmin.role_name(),
        Permission::VetAdmin.role_name(),
        Permission::Admin.role_name(),
    ];

    let created = UserService::new(db, config.bcrypt_cost)
        .ensure_user(&config.admin_username, &config.admin_password, &roles)
        .await?;

    if created {
        tracing::info!("Created admin user {}", config.admin_username);
        if config.admin_password == "admin" {
            tracing::warn!("Admin user {} uses the default password", config.admin_username);
        }
    }

    Ok(())
}
