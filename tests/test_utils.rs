#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;

use studio_backend::auth::password::hash_password;
use studio_backend::entities::booking::{Booking, BookingStatus};
use studio_backend::entities::category::Category;
use studio_backend::entities::service::Service;
use studio_backend::entities::user::User;
use studio_backend::entities::work::{Work, WorkResponse};
use studio_backend::settings::{AppConfig, AppEnvironment};

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Studio-API-Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://test".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough!!".to_string(),
        jwt_expiration_minutes: 15,
        refresh_token_secret: "test_refresh_secret_that_is_long_ok!!".to_string(),
        refresh_token_exp_days: 7,
        smtp_host: None,
        smtp_port: 587,
        smtp_from: "noreply@studio.local".to_string(),
        smtp_user: None,
        smtp_password: None,
        notification_email: None,
    }
}

pub const TEST_PASSWORD: &str = "Tripod&Shutter9Speed";

pub fn sample_user(id: Uuid) -> User {
    User {
        id,
        email: "admin@studio.com".to_string(),
        name: Some("Admin".to_string()),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        is_admin: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_category(slug: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        name_en: "Wedding".to_string(),
        name_zh_tw: "婚禮".to_string(),
        description_en: None,
        description_zh_tw: None,
        sort_order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_service(slug: &str) -> Service {
    Service {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        name_en: "Wedding Photography".to_string(),
        name_zh_tw: "婚禮攝影".to_string(),
        description_en: None,
        description_zh_tw: None,
        price: Some("NT$ 30,000".to_string()),
        duration: Some("8 hours".to_string()),
        icon: None,
        active: true,
        sort_order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_work(slug: &str) -> Work {
    Work {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title_en: "Sunset Wedding".to_string(),
        title_zh_tw: "夕陽婚禮".to_string(),
        description_en: None,
        description_zh_tw: None,
        cover_image: "https://cdn.studio.com/covers/sunset.jpg".to_string(),
        category_id: None,
        shoot_date: None,
        location: None,
        client: None,
        featured: false,
        published: true,
        sort_order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_work_response(slug: &str) -> WorkResponse {
    WorkResponse {
        work: sample_work(slug),
        category: None,
        images: Vec::new(),
    }
}

pub fn sample_booking(service_id: Option<Uuid>) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        name: "Sarah Lin".to_string(),
        email: "sarah@example.com".to_string(),
        phone: Some("0912345678".to_string()),
        service_id,
        preferred_date: None,
        message: "We would like a summer session.".to_string(),
        status: BookingStatus::New,
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
