//! Axum adapters for the mutation pipeline
//!
//! The pipeline itself is transport-agnostic; this module maps its
//! [`Outcome`] onto HTTP and provides form handlers a host application can
//! mount. No route table is assembled here — hosts own their `Router`.

use crate::actions::{self, ActionContext, NextState, Outcome};
use crate::core::form::FormInput;
use axum::Form;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use uuid::Uuid;

/// Shared handler state carrying the injected pipeline context
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ActionContext>,
}

impl AppState {
    pub fn new(ctx: ActionContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }
}

impl IntoResponse for NextState {
    fn into_response(self) -> Response {
        // Field errors render as 422 so clients can re-render the form;
        // message-only states (store failure banner, delete success) are 200
        let status = if self.has_errors() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::OK
        };
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            // 303 See Other: the canonical post-form-submission redirect
            Outcome::Redirect(target) => Redirect::to(&target).into_response(),
            Outcome::State(state) => state.into_response(),
        }
    }
}

/// POST handler: create an invoice from a form body
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<FormInput>,
) -> Outcome {
    actions::create_invoice(&state.ctx, &NextState::empty(), form).await
}

/// PUT handler: update the invoice addressed by the path id
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<FormInput>,
) -> Outcome {
    actions::update_invoice(&state.ctx, id, form).await
}

/// DELETE handler: remove the invoice addressed by the path id
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<Uuid>) -> NextState {
    actions::delete_invoice(&state.ctx, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::FieldErrors;

    #[test]
    fn test_redirect_outcome_maps_to_303() {
        let response = Outcome::Redirect("/dashboard/invoices".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/dashboard/invoices"
        );
    }

    #[test]
    fn test_field_errors_map_to_422() {
        let mut errors = FieldErrors::new();
        errors.insert("amount".to_string(), vec!["bad".to_string()]);
        let state = NextState::with_errors(errors, "Missing Fields. Failed to Create Invoice.");
        let response = Outcome::State(state).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_message_only_state_maps_to_200() {
        let response = NextState::message("Deleted Invoice").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
