//! Best-effort SMTP notification sender.
//!
//! The intake flow persists the inquiry first; this mailer is only ever
//! invoked afterwards and its failures degrade to a logged warning. Every
//! send is bounded by the configured timeout.

use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;
use tokio::time::timeout;
use tradegate_error::mail::MailError;
use tradegate_models::{
    constants::FALLBACK_CONTACT_EMAIL,
    entities::prelude::InquiryModel,
    settings::{Mail, MailEncryption},
};
use tracing::{info, instrument};

pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    cfg: Mail,
}

impl Mailer {
    /// Build the transport from the mail section of the configuration.
    ///
    /// A disabled section yields a mailer whose sends fail fast with
    /// [`MailError::Disabled`]; callers treat that like any other
    /// notification failure.
    pub fn from_settings(cfg: &Mail) -> Result<Self, MailError> {
        let transport = if cfg.enabled {
            let mut builder = match cfg.encryption {
                MailEncryption::Starttls => {
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)?
                }
                MailEncryption::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.host)?,
                MailEncryption::None => {
                    AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&cfg.host)
                }
            }
            .port(cfg.port)
            .timeout(Some(Duration::from_millis(cfg.timeout_ms)));

            if !cfg.username.is_empty() {
                builder = builder.credentials(Credentials::new(
                    cfg.username.clone(),
                    cfg.password.clone(),
                ));
            }

            Some(builder.build())
        } else {
            None
        };

        Ok(Self {
            transport,
            cfg: cfg.clone(),
        })
    }

    /// Resolve the notification recipient.
    ///
    /// Order: explicit configured override, else the settings row's primary
    /// contact email, else the hardcoded fallback address.
    pub fn resolve_recipient(&self, settings_email: Option<&str>) -> String {
        if !self.cfg.contact_recipient.trim().is_empty() {
            return self.cfg.contact_recipient.trim().to_owned();
        }
        if let Some(email) = settings_email {
            if !email.trim().is_empty() {
                return email.trim().to_owned();
            }
        }
        FALLBACK_CONTACT_EMAIL.to_owned()
    }

    /// Send the plain-text inquiry summary to `recipient`.
    ///
    /// Reply-to is the submitter's address so the operator can answer the
    /// lead directly from their mail client.
    #[instrument(name = "send-inquiry-notification", skip(self, inquiry), fields(inquiry_id = inquiry.id))]
    pub async fn send_inquiry_notification(
        &self,
        site_name: &str,
        recipient: &str,
        inquiry: &InquiryModel,
    ) -> Result<(), MailError> {
        let Some(transport) = &self.transport else {
            return Err(MailError::Disabled);
        };

        let from: Mailbox = self.cfg.from_address.parse()?;
        let reply_to: Mailbox = inquiry.email.parse()?;
        let to: Mailbox = recipient.parse()?;

        let subject = format!("[{site_name}] New inquiry: {}", inquiry.subject);
        let message = Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(to)
            .subject(subject)
            .body(render_notification_body(inquiry))?;

        timeout(
            Duration::from_millis(self.cfg.timeout_ms),
            transport.send(message),
        )
        .await
        .map_err(|_| MailError::Timeout(self.cfg.timeout_ms))??;

        info!(inquiry_id = inquiry.id, "inquiry notification delivered");
        Ok(())
    }
}

/// Structured plain-text summary of a submission.
fn render_notification_body(inquiry: &InquiryModel) -> String {
    format!(
        "New inquiry received\n\n\
         Name: {}\n\
         Email: {}\n\
         Company: {}\n\
         Website: {}\n\
         Country/Region: {}\n\n\
         Service interest: {}\n\
         Timeline: {}\n\
         Budget range: {}\n\
         Preferred contact method: {}\n\
         Phone/WhatsApp: {}\n\n\
         Subject: {}\n\n\
         Message:\n{}\n\n\
         IP: {}\n",
        inquiry.full_name,
        inquiry.email,
        inquiry.company_name,
        inquiry.website,
        inquiry.country,
        inquiry.service_interest,
        inquiry.timeline,
        inquiry.budget_range,
        inquiry.contact_method,
        inquiry.phone,
        inquiry.subject,
        inquiry.message,
        inquiry.ip_address.as_deref().unwrap_or("-"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer(contact_recipient: &str) -> Mailer {
        Mailer::from_settings(&Mail {
            contact_recipient: contact_recipient.into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn recipient_prefers_configured_override() {
        let m = mailer("ops@tradegate.example");
        assert_eq!(
            m.resolve_recipient(Some("info@site.example")),
            "ops@tradegate.example"
        );
    }

    #[test]
    fn recipient_falls_back_to_settings_email() {
        let m = mailer("");
        assert_eq!(
            m.resolve_recipient(Some("info@site.example")),
            "info@site.example"
        );
    }

    #[test]
    fn recipient_falls_back_to_hardcoded_address() {
        let m = mailer("");
        assert_eq!(m.resolve_recipient(None), FALLBACK_CONTACT_EMAIL);
        assert_eq!(m.resolve_recipient(Some("   ")), FALLBACK_CONTACT_EMAIL);
    }

    #[test]
    fn disabled_transport_fails_fast() {
        let m = mailer("");
        assert!(m.transport.is_none());
    }

    #[test]
    fn body_contains_all_lead_fields() {
        let inquiry = InquiryModel {
            id: 1,
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Market entry".into(),
            message: "We want in.".into(),
            company_name: "Doe GmbH".into(),
            website: "https://doe.example".into(),
            country: "Germany".into(),
            service_interest: "scouting".into(),
            timeline: "asap".into(),
            budget_range: "3k_10k".into(),
            contact_method: "email".into(),
            phone: "+49 1".into(),
            consent: true,
            ip_address: Some("203.0.113.7".into()),
            user_agent: "test".into(),
            is_handled: false,
            created_at: None,
            updated_at: None,
        };
        let body = render_notification_body(&inquiry);
        for needle in [
            "Jane Doe",
            "jane@example.com",
            "Doe GmbH",
            "scouting",
            "3k_10k",
            "203.0.113.7",
        ] {
            assert!(body.contains(needle), "missing {needle}");
        }
    }
}
