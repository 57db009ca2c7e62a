use uuid::Uuid;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::entities::setting::{SiteSettings, UpdateSettingsRequest};
use crate::errors::{AppError, FieldError};
use crate::repositories::setting::SettingRepository;
use crate::repositories::user::UserRepository;

pub struct SiteHandler<S, U>
where
    S: SettingRepository,
    U: UserRepository,
{
    pub setting_repo: S,
    pub user_repo: U,
}

impl<S, U> SiteHandler<S, U>
where
    S: SettingRepository,
    U: UserRepository,
{
    pub fn new(setting_repo: S, user_repo: U) -> Self {
        SiteHandler {
            setting_repo,
            user_repo,
        }
    }

    /// Public pages keep rendering with defaults when the settings read
    /// fails.
    pub async fn site_settings(&self) -> SiteSettings {
        match self.setting_repo.all().await {
            Ok(rows) => SiteSettings::from_rows(&rows),
            Err(e) => {
                tracing::warn!("Failed to load site settings, using defaults: {}", e);
                SiteSettings::default()
            }
        }
    }

    /// Admin view of the settings; unlike the public one, a read
    /// failure surfaces as an error.
    pub async fn site_settings_strict(&self) -> Result<SiteSettings, AppError> {
        let rows = self.setting_repo.all().await?;
        Ok(SiteSettings::from_rows(&rows))
    }

    /// Upserts the key/value pairs and, when both password fields are
    /// present, rotates the caller's password in the same request.
    pub async fn update_settings(
        &self,
        caller_id: &Uuid,
        request: UpdateSettingsRequest,
    ) -> Result<SiteSettings, AppError> {
        request.validate()?;

        if request.new_password.is_some() && request.current_password.is_none() {
            return Err(AppError::ValidationError(vec![FieldError {
                field: "current_password".to_string(),
                message: "Current password is required to set a new one".to_string(),
            }]));
        }

        if request.wants_password_change() {
            self.change_caller_password(caller_id, &request).await?;
        }

        self.setting_repo.upsert_many(&request.to_pairs()).await?;
        self.site_settings_strict().await
    }

    async fn change_caller_password(
        &self,
        caller_id: &Uuid,
        request: &UpdateSettingsRequest,
    ) -> Result<(), AppError> {
        let current = request.current_password.as_deref().unwrap_or_default();
        let new_password = request.new_password.as_deref().unwrap_or_default();

        let user = self
            .user_repo
            .get_user_by_id(caller_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify_password(current, &user.password_hash)? {
            return Err(AppError::ValidationError(vec![FieldError {
                field: "current_password".to_string(),
                message: "Current password is incorrect".to_string(),
            }]));
        }

        let new_hash = hash_password(new_password)?;
        self.user_repo.update_password(caller_id, &new_hash).await?;

        tracing::info!("Admin password updated");
        Ok(())
    }
}
