use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use access_core::{AccessRequirement, Gate, GateResult, GateRoutes, Session};

use crate::store::SessionStore;

/// Shared state for the guard middleware.
#[derive(Clone)]
pub struct GuardState {
    pub store: Arc<SessionStore>,
    pub routes: GateRoutes,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Middleware guarding a routed page: denials become redirects.
///
/// Apply per route group with the requirement bound in a closure:
///
/// ```ignore
/// let organizer_only = AccessRequirement::roles([Role::Organizer]);
/// Router::new().layer(from_fn_with_state(state.clone(), move |s, req, next| {
///     access_guard(s, organizer_only.clone(), req, next)
/// }));
/// ```
pub async fn access_guard(
    State(state): State<GuardState>,
    requirement: AccessRequirement,
    mut req: Request,
    next: Next,
) -> Response {
    state.store.ready().await;
    let session = state.store.current_session();

    match Gate::guard(&session, &requirement, &state.routes) {
        GateResult::Proceed => {
            // Hand the snapshot to handlers via request extensions
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        GateResult::RedirectTo(route) => {
            tracing::debug!(route = %route, path = %req.uri().path(), "Access denied, redirecting");
            Redirect::temporary(&route).into_response()
        }
        GateResult::ShowFallback(message) => forbidden_response(message),
    }
}

/// Middleware guarding inline content: a forbidden decision renders the
/// fallback message instead of redirecting. Missing authentication
/// still redirects to login.
pub async fn content_guard(
    State(state): State<GuardState>,
    requirement: AccessRequirement,
    mut req: Request,
    next: Next,
) -> Response {
    state.store.ready().await;
    let session = state.store.current_session();

    match Gate::guard_content(&session, &requirement, &state.routes, None) {
        GateResult::Proceed => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        GateResult::RedirectTo(route) => {
            tracing::debug!(route = %route, path = %req.uri().path(), "Access denied, redirecting");
            Redirect::temporary(&route).into_response()
        }
        GateResult::ShowFallback(message) => forbidden_response(message),
    }
}

fn forbidden_response(message: String) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

/// Extractor to easily get the session snapshot in guarded handlers
pub struct CurrentSession(pub Session);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Session missing from request extensions".to_string(),
            }),
        ))?;

        Ok(CurrentSession(session.clone()))
    }
}
