mod test_utils;

use mockall::{mock, predicate::*};
use uuid::Uuid;

use studio_backend::auth::jwt::JwtService;
use studio_backend::entities::user::{LoginUser, NewUser, User, UserInsert};
use studio_backend::errors::{AppError, AuthError};
use studio_backend::repositories::user::UserRepository;
use studio_backend::use_cases::auth::AuthHandler;
use test_utils::{sample_user, test_config, TEST_PASSWORD};

mock! {
    pub UserRepo {}

    #[async_trait::async_trait]
    impl UserRepository for UserRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
        async fn update_password(&self, id: &Uuid, password_hash: &str) -> Result<(), AppError>;
    }
}

fn handler(repo: MockUserRepo) -> AuthHandler<MockUserRepo, JwtService> {
    AuthHandler::new(repo, JwtService::new(&test_config()))
}

#[tokio::test]
async fn register_hashes_password_and_returns_id() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user()
        .withf(|insert: &UserInsert| {
            insert.email == "new@studio.com" && insert.password_hash != TEST_PASSWORD
        })
        .returning(|_| Ok(Uuid::new_v4()));

    let result = handler(repo)
        .register(NewUser {
            email: "new@studio.com".to_string(),
            name: None,
            password: TEST_PASSWORD.to_string(),
            is_admin: false,
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn register_rejects_weak_password() {
    let repo = MockUserRepo::new();

    let result = handler(repo)
        .register(NewUser {
            email: "new@studio.com".to_string(),
            name: None,
            password: "password".to_string(),
            is_admin: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn login_returns_both_tokens() {
    let user = sample_user(Uuid::new_v4());
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .with(eq("admin@studio.com"))
        .returning(move |_| Ok(Some(user.clone())));

    let auth = handler(repo)
        .login(LoginUser {
            email: "admin@studio.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let user = sample_user(Uuid::new_v4());
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let result = handler(repo)
        .login(LoginUser {
            email: "admin@studio.com".to_string(),
            password: "Wrong&Passw0rd".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email().returning(|_| Ok(None));

    let result = handler(repo)
        .login(LoginUser {
            email: "ghost@studio.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn refresh_token_issues_new_pair() {
    let user_id = Uuid::new_v4();
    let user = sample_user(user_id);

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_id()
        .with(eq(user_id))
        .returning(move |_| Ok(Some(user.clone())));

    let handler = handler(repo);
    let refresh = handler
        .token_service
        .create_refresh_jwt(&user_id)
        .unwrap();

    let auth = handler.refresh_token(&refresh).await.unwrap();
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn refresh_rejects_access_token() {
    let user_id = Uuid::new_v4();
    let user = sample_user(user_id);

    let repo = MockUserRepo::new();
    let handler = handler(repo);

    // Access tokens are signed with a different secret than refresh tokens.
    let access = handler.token_service.create_jwt(&user).unwrap();
    let result = handler.refresh_token(&access).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn login_with_malformed_email_is_bad_request() {
    use actix_web::{error::ResponseError, http::StatusCode};

    let result = handler(MockUserRepo::new())
        .login(LoginUser {
            email: "not-an-email".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, AuthError::InvalidRequest(_)));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}
