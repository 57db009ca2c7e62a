use async_trait::async_trait;

use crate::{
    entities::setting::Setting,
    errors::AppError,
    repositories::sqlx_repo::SqlxSettingRepo,
};

#[async_trait]
pub trait SettingRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Setting>, AppError>;
    async fn upsert_many(&self, pairs: &[(String, String)]) -> Result<(), AppError>;
}

impl SqlxSettingRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSettingRepo { pool }
    }
}

#[async_trait]
impl SettingRepository for SqlxSettingRepo {
    async fn all(&self) -> Result<Vec<Setting>, AppError> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn upsert_many(&self, pairs: &[(String, String)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        for (key, value) in pairs {
            sqlx::query(
                r#"
                INSERT INTO settings (key, value)
                VALUES ($1, $2)
                ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;
        }

        tx.commit().await.map_err(AppError::from)?;
        Ok(())
    }
}
