//! Simulated auth route handlers.
//!
//! "Logging in" writes the local auth flag; nothing is verified against a
//! server. The form accepts any name plus a plausible email.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use sole_street_core::UserProfile;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::Shell;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub shell: Shell,
    pub error: Option<String>,
}

/// Display the login page.
#[instrument(skip(state))]
pub async fn login_page(State(state): State<AppState>) -> Response {
    if state.auth().is_authenticated() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        shell: Shell::from_state(&state),
        error: None,
    }
    .into_response()
}

/// Handle a login attempt.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let name = form.name.trim();
    let email = form.email.trim();

    if name.is_empty() || !email.contains('@') {
        return Ok(LoginTemplate {
            shell: Shell::from_state(&state),
            error: Some("Enter your name and a valid email address.".to_string()),
        }
        .into_response());
    }

    state.auth().login(UserProfile::new(name, email))?;
    Ok(Redirect::to("/").into_response())
}

/// Clear the auth flag.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.auth().logout()?;
    Ok(Redirect::to("/"))
}
