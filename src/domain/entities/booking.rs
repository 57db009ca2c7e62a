use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::service::Service;

/// Lifecycle of an inquiry, from submission to resolution. Stored as
/// lowercase text; the DB CHECK constraint mirrors this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Contacted,
    Confirmed,
    Completed,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::New
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_id: Option<Uuid>,
    pub preferred_date: Option<NaiveDate>,
    pub message: String,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BookingWithService {
    #[serde(flatten)]
    pub booking: Booking,
    pub service: Option<Service>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewBookingRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    pub service_id: Option<Uuid>,
    pub preferred_date: Option<NaiveDate>,

    #[validate(length(min = 5, max = 2000))]
    pub message: String,
}

#[derive(Debug)]
pub struct BookingInsert {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_id: Option<Uuid>,
    pub preferred_date: Option<NaiveDate>,
    pub message: String,
    pub status: BookingStatus,
}

impl NewBookingRequest {
    pub fn prepare_for_insert(&self) -> BookingInsert {
        BookingInsert {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            service_id: self.service_id,
            preferred_date: self.preferred_date,
            message: self.message.clone(),
            status: BookingStatus::New,
        }
    }
}

/// Admin-side status/notes update.
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct BookingPatchRequest {
    pub status: Option<BookingStatus>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl BookingPatchRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }
}

/// Payload handed to the mailer when a booking arrives.
#[derive(Debug, Clone)]
pub struct BookingNotification {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_name: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub message: String,
}

impl BookingNotification {
    pub fn to_plain_text(&self) -> String {
        let mut lines = vec![
            "新預約通知".to_string(),
            String::new(),
            format!("姓名: {}", self.name),
            format!("Email: {}", self.email),
        ];

        if let Some(phone) = &self.phone {
            lines.push(format!("電話: {}", phone));
        }
        if let Some(service) = &self.service_name {
            lines.push(format!("服務項目: {}", service));
        }
        if let Some(date) = &self.preferred_date {
            lines.push(format!("偏好日期: {}", date));
        }

        lines.push(String::new());
        lines.push("訊息內容:".to_string());
        lines.push(self.message.clone());
        lines.push(String::new());
        lines.push(format!("收到時間: {}", Utc::now().to_rfc3339()));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<BookingStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn patch_with_no_fields_is_empty() {
        let patch: BookingPatchRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: BookingPatchRequest =
            serde_json::from_str("{\"status\": \"confirmed\"}").unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.status, Some(BookingStatus::Confirmed));
    }

    #[test]
    fn notification_includes_optional_fields_when_present() {
        let notification = BookingNotification {
            name: "Sarah".into(),
            email: "sarah@example.com".into(),
            phone: Some("0912345678".into()),
            service_name: Some("婚禮攝影".into()),
            preferred_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            message: "We would like an outdoor session.".into(),
        };

        let text = notification.to_plain_text();
        assert!(text.contains("Sarah"));
        assert!(text.contains("電話: 0912345678"));
        assert!(text.contains("服務項目: 婚禮攝影"));
        assert!(text.contains("2024-06-15"));
    }

    #[test]
    fn notification_skips_absent_fields() {
        let notification = BookingNotification {
            name: "John".into(),
            email: "john@example.com".into(),
            phone: None,
            service_name: None,
            preferred_date: None,
            message: "General inquiry".into(),
        };

        let text = notification.to_plain_text();
        assert!(!text.contains("電話"));
        assert!(!text.contains("服務項目"));
    }
}
