//! Contact page and inquiry intake.
//!
//! POST flow: pure validation, then one atomic INSERT, then the best-effort
//! notification. The notification can never fail the request; its errors are
//! logged with the inquiry id and surfaced as a non-fatal notice after the
//! redirect.

use crate::{
    pages::context::{base_context, client_ip, render_html, request_base, scaffold, PageMeta, Scaffold},
    AppState,
};
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tradegate_error::{mail::MailError, WebResult};
use tradegate_models::domain::prelude::{FieldErrors, InquiryForm, RequestMeta};
use tradegate_models::enums::inquiry::{
    BudgetRange, ChoiceSet, ContactMethod, InquiryTimeline, ServiceInterest,
};
use tradegate_repository::InquiryRepository;
use tracing::{debug, instrument, warn};

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    sent: Option<String>,
    #[serde(default)]
    notice: Option<String>,
}

/// GET /contact/ renders the form, optionally with the post-submit banner.
pub async fn contact_form(
    req: HttpRequest,
    query: web::Query<ContactQuery>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let scaffold = scaffold(&state.db).await?;
    let sent = query.sent.as_deref() == Some("1");
    let mail_warn = query.notice.as_deref() == Some("mail");
    render_contact(
        &state,
        &req,
        &scaffold,
        &InquiryForm::default(),
        &FieldErrors::default(),
        sent,
        mail_warn,
    )
}

/// POST /contact/ validates, persists, notifies and redirects.
#[instrument(name = "contact-submit", skip_all)]
pub async fn contact_submit(
    req: HttpRequest,
    form: web::Form<InquiryForm>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let form = form.into_inner();
    let meta = RequestMeta::new(
        client_ip(&state, &req),
        req.headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default(),
    );

    let inquiry = match form.validate(meta) {
        Ok(inquiry) => inquiry,
        Err(errors) => {
            // Invalid input re-renders the form with field errors and the
            // submitted values preserved; the request itself succeeds.
            let scaffold = scaffold(&state.db).await?;
            return render_contact(&state, &req, &scaffold, &form, &errors, false, false);
        }
    };

    let created = InquiryRepository::create(&state.db, inquiry).await?;

    // Persisted; everything from here on is best-effort messaging.
    let scaffold = scaffold(&state.db).await?;
    let settings_email = Some(scaffold.site.primary_email.as_str()).filter(|e| !e.is_empty());
    let recipient = state.mailer.resolve_recipient(settings_email);

    let mail_warn = match state
        .mailer
        .send_inquiry_notification(&scaffold.site.site_name, &recipient, &created)
        .await
    {
        Ok(()) => false,
        Err(MailError::Disabled) => {
            debug!(inquiry_id = created.id, "mail transport disabled, skipping notification");
            false
        }
        Err(e) => {
            warn!(inquiry_id = created.id, error = %e, "inquiry notification failed");
            true
        }
    };

    let location = if mail_warn {
        "/contact/?sent=1&notice=mail"
    } else {
        "/contact/?sent=1"
    };

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish())
}

#[allow(clippy::too_many_arguments)]
fn render_contact(
    state: &AppState,
    req: &HttpRequest,
    scaffold: &Scaffold,
    form: &InquiryForm,
    errors: &FieldErrors,
    sent: bool,
    mail_warn: bool,
) -> WebResult<HttpResponse> {
    let meta = PageMeta {
        title: "Contact".into(),
        description: format!("Get in touch with {}.", scaffold.site.site_name),
        og_image: scaffold.site.og_image_url.clone(),
        canonical: format!("{}/contact/", request_base(state, req)),
    };

    let mut ctx = base_context(scaffold, &meta);
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("sent", &sent);
    ctx.insert("mail_warn", &mail_warn);
    ctx.insert("service_choices", ServiceInterest::choices());
    ctx.insert("timeline_choices", InquiryTimeline::choices());
    ctx.insert("budget_choices", BudgetRange::choices());
    ctx.insert("contact_method_choices", ContactMethod::choices());

    render_html(state, "contact.html", &ctx)
}
