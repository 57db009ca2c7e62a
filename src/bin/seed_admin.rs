//! Seeds (or resets) the admin account. Run once after deploying:
//!
//!   ADMIN_EMAIL=... ADMIN_PASSWORD=... cargo run --bin seed_admin

use anyhow::{bail, Context, Result};

use studio_backend::{
    auth::password::hash_password,
    db::postgres::{create_pool, run_migrations},
    password::validate_password_strength,
    settings::AppConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let email = std::env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?;
    let password = std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".to_string());

    if validate_password_strength(&password).is_err() {
        bail!("ADMIN_PASSWORD does not meet the password policy");
    }

    let config = AppConfig::new().context("Failed to load configuration")?;
    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool).await.context("Failed to run migrations")?;

    let password_hash = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let id: uuid::Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (email, name, password_hash, is_admin)
        VALUES ($1, $2, $3, TRUE)
        ON CONFLICT (email) DO UPDATE
        SET name = EXCLUDED.name,
            password_hash = EXCLUDED.password_hash,
            is_admin = TRUE,
            updated_at = NOW()
        RETURNING id
        "#,
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(&pool)
    .await
    .context("Failed to upsert admin user")?;

    tracing::info!("Admin account ready: {} ({})", email, id);
    Ok(())
}
