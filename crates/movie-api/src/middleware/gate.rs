//! Per-route session gate
//!
//! Every `/api/v1` route is bound to a [`Command`]. The gate resolves the
//! request's session against it before the handler runs; refused requests
//! are redirected to the sign-in form.

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use movie_service::{AccessGate, Command};
use tracing::warn;

use crate::extractors::session_token;
use crate::response::SignInRedirect;
use crate::state::AppState;

/// Gate state of one route
#[derive(Debug, Clone)]
pub struct RouteGate {
    state: AppState,
    command: Command,
}

/// Bind `command` to a route's method router
pub fn guard(
    state: &AppState,
    command: Command,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    let gate = RouteGate {
        state: state.clone(),
        command,
    };
    route.route_layer(middleware::from_fn_with_state(gate, check_session))
}

async fn check_session(
    State(gate): State<RouteGate>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(request.headers());

    match AccessGate::new(gate.state.sessions()).check(gate.command, token.as_deref()) {
        Ok(access) => {
            request.extensions_mut().insert(access);
            next.run(request).await
        }
        Err(rejection) => {
            warn!(
                command = %rejection.command,
                reason = ?rejection.reason,
                "Request refused by gate"
            );
            SignInRedirect(rejection).into_response()
        }
    }
}
