//! Request body validation
//!
//! [`ValidatedJson`] parses a JSON body and runs its `validator` rules before
//! the handler sees it. Every failure (syntax, missing field, wrong type,
//! rule violation) becomes a 400 `AppError`. [`ValidatedPath`] does the same
//! for path parameters.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use validator::{Validate, ValidationErrors};

/// JSON extractor that also validates the payload
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;
        value.validate().map_err(validation_errors_to_error)?;
        Ok(ValidatedJson(value))
    }
}

/// Path extractor whose rejection is an `InvalidFormat` `AppError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_format(rejection.body_text()))?;
        Ok(ValidatedPath(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        // serde 报告的字段缺失
        JsonRejection::JsonDataError(e) if e.body_text().contains("missing field") => {
            AppError::with_message(ErrorCode::RequiredField, e.body_text())
        }
        // 类型不匹配
        JsonRejection::JsonDataError(e) => AppError::invalid_format(e.body_text()),
        JsonRejection::JsonSyntaxError(e) => AppError::invalid_format(e.body_text()),
        JsonRejection::MissingJsonContentType(e) => {
            AppError::with_message(ErrorCode::InvalidRequest, e.body_text())
        }
        other => AppError::invalid_format(other.body_text()),
    }
}

/// Flatten field errors into one message plus a `field -> message` detail map
///
/// When every failed rule maps to the same [`ErrorCode::from_rule`] code that
/// code is used, otherwise `ValidationFailed`.
pub fn validation_errors_to_error(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();

    let mut codes = field_errors
        .values()
        .flat_map(|errs| errs.iter())
        .map(|e| ErrorCode::from_rule(&e.code));
    let first = codes.next().flatten();
    let code = match first {
        Some(code) if codes.all(|c| c == Some(code)) => code,
        _ => ErrorCode::ValidationFailed,
    };

    let mut fields: Vec<(String, String)> = field_errors
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
                .collect::<Vec<_>>()
                .join(", ");
            (field.to_string(), message)
        })
        .collect();
    fields.sort();

    let summary = fields
        .iter()
        .map(|(_, msg)| msg.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    fields.into_iter().fold(
        AppError::with_message(code, summary),
        |err, (field, message)| err.with_detail(field, message),
    )
}
