//! Public booking route handlers
//!
//! Reservation and contact form submissions. Both validate before any store
//! access and answer with a 303 redirect so the browser re-issues as GET.

use crate::error::{validation_error, ApiResult, AppError};
use crate::state::SharedState;
use crate::store::ReservationFields;
use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

fn default_lang() -> String {
    "en".to_string()
}

/// Reservation form payload (shared with the admin edit form)
#[derive(Debug, Deserialize, Validate)]
pub struct ReservationForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,

    // Kept as text so a malformed count is a validation error, not a
    // deserialization rejection.
    #[serde(default)]
    #[validate(length(min = 1, message = "guests is required"))]
    pub guests: String,

    pub message: Option<String>,

    #[serde(default = "default_lang")]
    pub lang: String,
}

impl ReservationForm {
    /// Convert into store fields; `guests` must parse as an integer
    pub fn into_fields(self) -> Result<ReservationFields, AppError> {
        let guests = self
            .guests
            .trim()
            .parse::<i64>()
            .map_err(|_| validation_error("guests must be a whole number"))?;

        Ok(ReservationFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests,
            message: self.message,
            lang: self.lang,
        })
    }
}

/// Contact form payload
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,

    #[serde(default = "default_lang")]
    pub lang: String,
}

/// Handle a reservation submission
pub async fn submit_reservation(
    State(state): State<SharedState>,
    Form(form): Form<ReservationForm>,
) -> ApiResult<Redirect> {
    form.validate().map_err(|e| validation_error(e.to_string()))?;

    let lang = form.lang.clone();
    let fields = form.into_fields()?;
    let id = state.store.create(fields).await?;

    info!(id, "reservation created");

    Ok(Redirect::to(&format!(
        "/?lang={}&reservation=success",
        lang
    )))
}

/// Handle a contact form submission
///
/// The message is accepted but intentionally not persisted or forwarded
/// anywhere; the site has no outbox. Only the redirect tells the visitor
/// it was received.
pub async fn submit_contact_form(Form(form): Form<ContactForm>) -> ApiResult<Redirect> {
    form.validate().map_err(|e| validation_error(e.to_string()))?;

    info!(subject = %form.subject, "contact form accepted (not stored)");

    Ok(Redirect::to(&format!(
        "/contact?lang={}&message=sent",
        form.lang
    )))
}
