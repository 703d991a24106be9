//! The taco design form.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tacocloud_core::{prepare_design_context, DesignContext, Error as CoreError, Taco};

use crate::error::Result;
use crate::session::ResolvedSession;
use crate::state::AppState;
use crate::views::DESIGN_VIEW;

pub fn routes() -> Router<AppState> {
    Router::new().route("/design", get(show_design_form).post(process_taco))
}

async fn show_design_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let mut session = ResolvedSession::resolve(&state.sessions, &headers)?;
    let context = load_design_context(&state, &mut session)?;

    render_design(&state, &session, StatusCode::OK, &context)
}

/// Submitted form fields. `ingredients` repeats once per checked box.
#[derive(Debug, Default)]
struct TacoForm {
    name: String,
    ingredients: Vec<String>,
}

impl TacoForm {
    fn from_fields(fields: Vec<(String, String)>) -> Self {
        let mut form = TacoForm::default();
        for (key, value) in fields {
            match key.as_str() {
                "name" => form.name = value,
                "ingredients" => form.ingredients.push(value),
                _ => {}
            }
        }
        form
    }
}

async fn process_taco(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let mut session = ResolvedSession::resolve(&state.sessions, &headers)?;
    let context = load_design_context(&state, &mut session)?;
    let form = TacoForm::from_fields(fields);

    let (taco, mut problems) = Taco::from_submission(form.name, &form.ingredients);
    match taco.validate() {
        Ok(()) => {}
        Err(CoreError::InvalidTaco(invalid)) => problems.extend(invalid),
        Err(other) => return Err(other.into()),
    }

    if problems.is_empty() {
        tracing::info!(session = %session.id, taco = %taco.name, "Added taco to order");
        context.taco_order().lock().add_taco(taco);

        let mut response = Redirect::to("/design").into_response();
        session.attach_cookie(&mut response)?;
        return Ok(response);
    }

    tracing::warn!(session = %session.id, ?problems, "Rejected taco submission");
    let context = context.with_rejected(taco, problems);
    render_design(&state, &session, StatusCode::BAD_REQUEST, &context)
}

/// Build the design model, reopening the session if it expired after it was resolved.
fn load_design_context(state: &AppState, session: &mut ResolvedSession) -> Result<DesignContext> {
    match prepare_design_context(state.sessions.as_ref(), &session.id) {
        Err(CoreError::SessionNotFound(_)) => {
            tracing::debug!(session = %session.id, "Session expired mid-request, reopening");
            session.reopen(&state.sessions)?;
            Ok(prepare_design_context(state.sessions.as_ref(), &session.id)?)
        }
        other => Ok(other?),
    }
}

fn render_design(
    state: &AppState,
    session: &ResolvedSession,
    status: StatusCode,
    context: &DesignContext,
) -> Result<Response> {
    let body = state.views.render(DESIGN_VIEW, context)?;
    let mut response = (status, Html(body)).into_response();
    session.attach_cookie(&mut response)?;
    Ok(response)
}
