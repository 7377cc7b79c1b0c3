//! Notification service HTTP handler
//!
//! Stateless relay: validate, dispatch one email, answer. Nothing is
//! queued or retried.

use actix_web::{post, web, HttpResponse};
use log::info;
use serde_json::json;

use crate::{domain::dto::notify::NotifyRequest, errors::AppError, services::Mailer};

/// `POST /api/notify`
///
/// Sends one notification email to the supplied recipient. Transport
/// failure answers 500 with the relay's detail message.
#[post("")]
pub async fn notify(
    mailer: web::Data<Mailer>,
    body: web::Json<NotifyRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let recipient = body.normalized_email();
    mailer.send(&recipient, body.trimmed_message()).await?;

    info!("notification dispatched for user {}", body.user_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Email notification sent successfully"
    })))
}
