// src/cli/commands.rs
use crate::application::note_form::TITLE_REQUIRED;
use crate::application::{
    AiApi, AiPanelState, AiToolsView, Confirm, NoteApi, NoteDetailView, NoteFormView,
    NotesListView, Route, ViewState,
};
use crate::domain::{AiTool, NoteId};
use crate::infrastructure::PagePreview;
use crate::ports::TextPresenter;
use crate::shell::{PageQuery, Shell};
use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

#[instrument(level = "debug", skip_all)]
pub async fn list<A: NoteApi + ?Sized>(api: &A, json: bool, out: &mut impl Write) -> Result<()> {
    let mut view = NotesListView::new();
    view.refresh(api).await;
    print_list(&view, json, out)
}

#[instrument(level = "debug", skip(api, out))]
pub async fn search<A: NoteApi + ?Sized>(
    api: &A,
    query: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = NotesListView::new();
    view.set_query(query);
    view.search(api).await;
    print_list(&view, json, out)
}

#[instrument(level = "debug", skip(api, out))]
pub async fn view<A: NoteApi + ?Sized>(
    api: &A,
    id: &NoteId,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = NoteDetailView::new(id.clone());
    view.load(api).await;

    match view.state() {
        ViewState::Failed { message } => bail!("{message}"),
        ViewState::Ready(note) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(note)?)?;
        }
        _ => write!(out, "{}", TextPresenter::new().note_detail(&view))?,
    }
    Ok(())
}

#[instrument(level = "debug", skip(api, content, out))]
pub async fn create<A: NoteApi + ?Sized>(
    api: &A,
    title: &str,
    content: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut form = NoteFormView::create();
    form.set_title(title);
    form.set_content(content);
    submit(api, form, out).await
}

/// Loads the note, overwrites the given fields and saves it.
#[instrument(level = "debug", skip(api, content, out))]
pub async fn edit<A: NoteApi + ?Sized>(
    api: &A,
    id: &NoteId,
    title: Option<&str>,
    content: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let mut form = NoteFormView::edit(id.clone());
    form.load(api).await;
    if let Some(message) = form.error() {
        bail!("{message}");
    }

    if let Some(title) = title {
        form.set_title(title);
    }
    if let Some(content) = content {
        form.set_content(content);
    }
    submit(api, form, out).await
}

#[instrument(level = "debug", skip(api, confirm, out))]
pub async fn delete<A, C>(api: &A, id: &NoteId, confirm: &C, out: &mut impl Write) -> Result<()>
where
    A: NoteApi + ?Sized,
    C: Confirm + ?Sized,
{
    let mut view = NoteDetailView::new(id.clone());
    match view.delete(api, confirm).await {
        Some(route) => follow(api, &route, out).await,
        None => match view.state().error() {
            Some(message) => bail!("{message}"),
            None => {
                writeln!(out, "Delete cancelled.")?;
                Ok(())
            }
        },
    }
}

#[instrument(level = "debug", skip(api, text, out))]
pub async fn ai<A: AiApi + ?Sized>(
    api: &A,
    tool: AiTool,
    text: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = AiToolsView::new();
    view.select_tool(tool);
    view.set_input(text);
    view.submit(api).await;

    if let AiPanelState::Failed(message) = view.state() {
        bail!("{message}");
    }
    write!(out, "{}", TextPresenter::new().ai_result(&view))?;
    Ok(())
}

/// Renders `location` through the shell and opens the page in the browser.
///
/// Returns the path of the written page.
#[instrument(level = "debug", skip(shell, preview))]
pub async fn open(shell: &Shell, location: &str, preview: &mut PagePreview) -> Result<PathBuf> {
    let (route, query) = resolve_location(location)?;
    debug!(?route, ?query, "Opening page");

    let page = shell.render(&route, &query).await;
    let path = preview.create_temp_file(&page.html)?;
    preview.open_in_browser(&path).await?;
    Ok(path)
}

/// Split a location such as `/notes?query=milk` into route and query.
pub fn resolve_location(location: &str) -> Result<(Route, PageQuery)> {
    let base = Url::parse("http://localhost/").context("Failed to build base URL")?;
    let url = base
        .join(location.trim())
        .with_context(|| format!("Invalid route: {location}"))?;

    let mut query = PageQuery::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "query" => query.query = Some(value.into_owned()),
            "tool" => query.tool = Some(value.into_owned()),
            _ => debug!(%key, "Ignoring query parameter"),
        }
    }
    Ok((Route::parse(url.path()), query))
}

async fn submit<A: NoteApi + ?Sized>(api: &A, mut form: NoteFormView, out: &mut impl Write) -> Result<()> {
    match form.submit(api).await {
        Some(route) => {
            info!("Saved note");
            follow(api, &route, out).await
        }
        None if form.title_invalid() => bail!(TITLE_REQUIRED),
        None => bail!("{}", form.error().unwrap_or("Note was not saved")),
    }
}

/// Show the view a successful action navigated to.
async fn follow<A: NoteApi + ?Sized>(api: &A, route: &Route, out: &mut impl Write) -> Result<()> {
    match route {
        Route::NotesList => list(api, false, out).await,
        other => {
            writeln!(out, "{}", other.path())?;
            Ok(())
        }
    }
}

fn print_list(view: &NotesListView, json: bool, out: &mut impl Write) -> Result<()> {
    match view.state() {
        ViewState::Failed { message } => bail!("{message}"),
        ViewState::Ready(notes) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(notes)?)?;
        }
        _ => write!(out, "{}", TextPresenter::new().notes_list(view))?,
    }
    Ok(())
}
