//! Inquiry form domain models and validation.
//!
//! Form validation is pure: it reads nothing but the submitted fields and
//! produces either a persistable [`NewInquiry`] or a per-field error map
//! suitable for re-rendering the form.

use crate::{
    constants::{MESSAGE_MIN_LEN, USER_AGENT_MAX_LEN},
    entities::inquiry::{ActiveModel, Entity as InquiryEntity},
    enums::inquiry::{BudgetRange, ChoiceSet, ContactMethod, InquiryTimeline, ServiceInterest},
    initializer::SeedableTrait,
};
use sea_orm::{DeriveIntoActiveModel, IntoActiveModel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{ValidateEmail, ValidateUrl};

/// Key used for errors that are not attached to a single field.
pub const FORM_ERROR_KEY: &str = "form";

/// Raw contact form submission, exactly as posted.
///
/// Kept `Serialize` so a rejected submission can be fed back into the
/// template with the entered values preserved.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InquiryForm {
    /// Honeypot; humans never see or fill this input.
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub service_interest: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub contact_method: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Checkbox; present when checked.
    #[serde(default)]
    pub consent: Option<String>,
}

/// Field name to messages, ordered for stable rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Request-derived metadata captured alongside a submission.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: String,
}

impl RequestMeta {
    /// Build metadata, truncating the User-Agent to the stored column width.
    pub fn new(ip_address: Option<String>, user_agent: &str) -> Self {
        let mut user_agent = user_agent.to_owned();
        user_agent.truncate(USER_AGENT_MAX_LEN);
        Self {
            ip_address,
            user_agent,
        }
    }
}

/// Validated, persistable inquiry.
#[derive(Debug, Clone, DeriveIntoActiveModel)]
pub struct NewInquiry {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub company_name: String,
    pub website: String,
    pub country: String,
    pub service_interest: String,
    pub timeline: String,
    pub budget_range: String,
    pub contact_method: String,
    pub phone: String,
    pub consent: bool,
    pub ip_address: Option<String>,
    pub user_agent: String,
}

impl SeedableTrait for NewInquiry {
    type ActiveModel = ActiveModel;
    type Entity = InquiryEntity;

    #[inline]
    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

impl InquiryForm {
    /// Whether the consent checkbox was ticked.
    pub fn consent_given(&self) -> bool {
        matches!(self.consent.as_deref(), Some("true") | Some("on") | Some("1"))
    }

    /// Validate the submission and combine it with the request metadata.
    ///
    /// Pure with respect to storage: no lookups, no side effects. On failure
    /// the error map carries one entry per offending field (plus the
    /// form-level honeypot rejection under [`FORM_ERROR_KEY`]).
    pub fn validate(&self, meta: RequestMeta) -> Result<NewInquiry, FieldErrors> {
        let mut errors = FieldErrors::default();

        // Honeypot first: a filled hidden field means a bot, and no other
        // feedback should leak which fields would otherwise be valid.
        if !self.website_url.trim().is_empty() {
            errors.add(FORM_ERROR_KEY, "Spam detected.");
            return Err(errors);
        }

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.add("full_name", "This field is required.");
        } else if full_name.len() > 120 {
            errors.add("full_name", "Ensure this value has at most 120 characters.");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "This field is required.");
        } else if !email.validate_email() {
            errors.add("email", "Enter a valid email address.");
        }

        let subject = self.subject.trim();
        if subject.is_empty() {
            errors.add("subject", "This field is required.");
        } else if subject.len() > 140 {
            errors.add("subject", "Ensure this value has at most 140 characters.");
        }

        let message = self.message.trim();
        if message.len() < MESSAGE_MIN_LEN {
            errors.add(
                "message",
                "Please provide a little more detail (at least 10 characters).",
            );
        }

        let company_name = self.company_name.trim();
        if company_name.len() > 160 {
            errors.add(
                "company_name",
                "Ensure this value has at most 160 characters.",
            );
        }

        let website = self.website.trim();
        if !website.is_empty() && !website.validate_url() {
            errors.add("website", "Enter a valid URL.");
        }

        let country = self.country.trim();
        if country.len() > 80 {
            errors.add("country", "Ensure this value has at most 80 characters.");
        }

        let service_interest = self.service_interest.trim();
        if !service_interest.is_empty() && !ServiceInterest::is_valid(service_interest) {
            errors.add(
                "service_interest",
                "Select a valid choice for what you need.",
            );
        }

        let timeline = self.timeline.trim();
        if !timeline.is_empty() && !InquiryTimeline::is_valid(timeline) {
            errors.add("timeline", "Select a valid timeline choice.");
        }

        let budget_range = self.budget_range.trim();
        if !budget_range.is_empty() && !BudgetRange::is_valid(budget_range) {
            errors.add("budget_range", "Select a valid budget choice.");
        }

        let contact_method = self.contact_method.trim();
        if !contact_method.is_empty() && !ContactMethod::is_valid(contact_method) {
            errors.add("contact_method", "Select a valid contact method.");
        }

        let phone = self.phone.trim();
        if phone.len() > 40 {
            errors.add("phone", "Ensure this value has at most 40 characters.");
        }

        // Cross-field rule: picking phone contact requires a number. The
        // error is scoped to `phone` so the form highlights that input only.
        if contact_method == ContactMethod::PHONE && phone.is_empty() {
            errors.add(
                "phone",
                "Please add a phone/WhatsApp number, or choose Email/Video call.",
            );
        }

        if !self.consent_given() {
            errors.add("consent", "Consent is required to submit this form.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewInquiry {
            full_name: full_name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
            company_name: company_name.into(),
            website: website.into(),
            country: country.into(),
            service_interest: service_interest.into(),
            timeline: timeline.into(),
            budget_range: budget_range.into(),
            contact_method: contact_method.into(),
            phone: phone.into(),
            consent: true,
            ip_address: meta.ip_address,
            user_agent: meta.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Market entry".into(),
            message: "We want to enter the EU market next spring.".into(),
            service_interest: "scouting".into(),
            timeline: "1_3_months".into(),
            budget_range: "3k_10k".into(),
            contact_method: "email".into(),
            consent: Some("true".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        let inquiry = valid_form().validate(RequestMeta::default()).unwrap();
        assert_eq!(inquiry.full_name, "Jane Doe");
        assert!(inquiry.consent);
    }

    #[test]
    fn honeypot_rejects_regardless_of_other_fields() {
        let mut form = valid_form();
        form.website_url = "http://spam.example".into();
        let errors = form.validate(RequestMeta::default()).unwrap_err();
        assert!(errors.contains(FORM_ERROR_KEY));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn short_message_is_rejected() {
        let mut form = valid_form();
        form.message = "   short   ".into();
        let errors = form.validate(RequestMeta::default()).unwrap_err();
        assert!(errors.contains("message"));
    }

    #[test]
    fn missing_consent_is_rejected() {
        let mut form = valid_form();
        form.consent = None;
        let errors = form.validate(RequestMeta::default()).unwrap_err();
        assert!(errors.contains("consent"));
    }

    #[test]
    fn phone_contact_without_number_scopes_error_to_phone() {
        let mut form = valid_form();
        form.contact_method = "phone".into();
        form.phone = "   ".into();
        let errors = form.validate(RequestMeta::default()).unwrap_err();
        assert!(errors.contains("phone"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let mut form = valid_form();
        form.budget_range = "1k-3k".into();
        let errors = form.validate(RequestMeta::default()).unwrap_err();
        assert!(errors.contains("budget_range"));
    }

    #[test]
    fn user_agent_is_truncated() {
        let meta = RequestMeta::new(Some("203.0.113.7".into()), &"x".repeat(400));
        assert_eq!(meta.user_agent.len(), USER_AGENT_MAX_LEN);
    }

    #[test]
    fn values_are_trimmed_before_persistence() {
        let mut form = valid_form();
        form.full_name = "  Jane Doe  ".into();
        form.message = "  We want to enter the EU market next spring.  ".into();
        let inquiry = form.validate(RequestMeta::default()).unwrap();
        assert_eq!(inquiry.full_name, "Jane Doe");
        assert!(!inquiry.message.starts_with(' '));
    }
}
