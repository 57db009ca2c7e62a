use derive_more::Display;
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::entities::booking::BookingNotification;
use crate::settings::AppConfig;

#[derive(Debug, Display)]
pub enum MailError {
    #[display("SMTP transport error: {_0}")]
    Transport(String),

    #[display("Email address parse error: {_0}")]
    Address(String),

    #[display("Email build error: {_0}")]
    Build(String),
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(e.to_string())
    }
}

impl From<lettre::address::AddressError> for MailError {
    fn from(e: lettre::address::AddressError) -> Self {
        MailError::Address(e.to_string())
    }
}

/// Async SMTP mailer for booking notifications. Constructed only when
/// `smtp_host` is configured; otherwise notifications are skipped.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    notify_to: String,
}

impl Mailer {
    pub fn from_config(config: &AppConfig) -> Option<Result<Self, MailError>> {
        let host = config.smtp_host.as_deref()?;

        let result = (|| {
            let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
                .port(config.smtp_port);

            if let (Some(user), Some(password)) = (&config.smtp_user, &config.smtp_password) {
                builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
            }

            Ok(Mailer {
                transport: builder.build(),
                from: config.smtp_from.clone(),
                notify_to: config
                    .notification_email
                    .clone()
                    .unwrap_or_else(|| config.smtp_from.clone()),
            })
        })();

        Some(result)
    }

    /// Sends the new-booking notification to the studio inbox. The caller's
    /// email is set as reply-to so the studio can answer directly.
    pub async fn send_booking_notification(
        &self,
        booking: &BookingNotification,
    ) -> Result<(), MailError> {
        let subject = format!(
            "[新預約] {} - {}",
            booking.name,
            booking.service_name.as_deref().unwrap_or("一般諮詢")
        );

        let email = Message::builder()
            .from(self.from.parse()?)
            .to(self.notify_to.parse()?)
            .reply_to(booking.email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(booking.to_plain_text())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport.send(email).await?;
        Ok(())
    }
}
