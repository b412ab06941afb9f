// src/shell/server.rs
use crate::application::{FormMode, Route};
use crate::domain::{AiTool, NoteDraft, NoteId};
use crate::shell::{parse_tool, DeleteOrigin, Outcome, Page, PageQuery, Shell};
use anyhow::{Context, Result};
use axum::extract::{Form, Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct NoteForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl From<NoteForm> for NoteDraft {
    fn from(form: NoteForm) -> Self {
        NoteDraft::new(form.title, form.content)
    }
}

#[derive(Debug, Deserialize)]
struct DeleteForm {
    #[serde(default)]
    confirmed: Option<String>,
    #[serde(default)]
    from: Option<String>,
}

impl DeleteForm {
    fn confirmed(&self) -> bool {
        matches!(self.confirmed.as_deref(), Some("yes" | "true"))
    }

    fn origin(&self) -> DeleteOrigin {
        match self.from.as_deref() {
            Some("list") => DeleteOrigin::List,
            _ => DeleteOrigin::Detail,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AiForm {
    #[serde(default)]
    tool: Option<String>,
    #[serde(default)]
    text: String,
}

impl AiForm {
    fn tool(&self) -> AiTool {
        parse_tool(self.tool.as_deref()).unwrap_or_default()
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let status = if self.found {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        (status, Html(self.html)).into_response()
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Navigate(route) => Redirect::to(&route.path()).into_response(),
            Outcome::Render(page) => page.into_response(),
        }
    }
}

/// Routes every page through the route table; form posts get their own
/// handlers.
pub fn router(shell: Shell) -> Router {
    Router::new()
        .route("/notes", get(page).post(create_note))
        .route("/notes/edit/{id}", get(page).post(update_note))
        .route("/notes/{id}/delete", post(delete_note))
        .route("/ai-tools", get(page).post(run_ai))
        .fallback(page)
        .with_state(shell)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(shell: Shell, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    let local = listener.local_addr().context("Failed to read bound address")?;

    info!(%local, "Serving web interface");
    println!("web interface at http://{local}");

    axum::serve(listener, router(shell))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Web interface stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

async fn page(State(shell): State<Shell>, uri: Uri, Query(query): Query<PageQuery>) -> Page {
    let route = Route::parse(uri.path());
    debug!(path = uri.path(), ?route, "Rendering page");
    shell.render(&route, &query).await
}

async fn create_note(State(shell): State<Shell>, Form(form): Form<NoteForm>) -> Outcome {
    shell.submit_note(FormMode::Create, form.into()).await
}

async fn update_note(
    State(shell): State<Shell>,
    Path(id): Path<String>,
    Form(form): Form<NoteForm>,
) -> Outcome {
    match NoteId::parse(&id) {
        Ok(id) => shell.submit_note(FormMode::Edit(id), form.into()).await,
        Err(_) => Outcome::Render(shell.not_found()),
    }
}

async fn delete_note(
    State(shell): State<Shell>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Outcome {
    match NoteId::parse(&id) {
        Ok(id) => shell.delete_note(id, form.origin(), form.confirmed()).await,
        Err(_) => Outcome::Render(shell.not_found()),
    }
}

async fn run_ai(State(shell): State<Shell>, Form(form): Form<AiForm>) -> Page {
    shell.run_ai(form.tool(), form.text).await
}
