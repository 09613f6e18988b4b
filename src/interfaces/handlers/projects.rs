use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use tracing::instrument;

use crate::{
    entities::{dashboard::DashboardResponse, project::ProjectForm},
    errors::AppError,
    handlers::{session::AdminSession, DeleteQuery},
    utils::valid_id::valid_record_id,
    AppState,
};

#[instrument(skip(state, session), fields(session = %session.id))]
pub async fn list_projects(
    state: web::Data<AppState>,
    session: AdminSession,
) -> Result<impl Responder, AppError> {
    let component = state.project_editors.editor(&session.id);
    let mut editor = component.read().await;
    editor.list().await;

    Ok(session.respond(&editor.snapshot(None)))
}

#[instrument(skip(state, session, form), fields(session = %session.id))]
pub async fn submit_project(
    state: web::Data<AppState>,
    session: AdminSession,
    form: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let component = state.project_editors.editor(&session.id);
    let mut editor = component.write().await?;
    let notification = editor.submit(form.into_inner()).await;

    Ok(session.respond(&editor.snapshot(Some(notification))))
}

#[instrument(skip(state, session, project_id), fields(session = %session.id))]
pub async fn begin_edit(
    state: web::Data<AppState>,
    session: AdminSession,
    project_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = valid_record_id(&project_id)?;
    let component = state.project_editors.editor(&session.id);
    let mut editor = component.write().await?;
    let notification = editor.begin_edit(&id).await;

    Ok(session.respond(&editor.snapshot(Some(notification))))
}

#[instrument(skip(state, session), fields(session = %session.id))]
pub async fn begin_create(
    state: web::Data<AppState>,
    session: AdminSession,
) -> Result<impl Responder, AppError> {
    let component = state.project_editors.editor(&session.id);
    let mut editor = component.write().await?;
    editor.begin_create();

    Ok(session.respond(&editor.snapshot(None)))
}

#[instrument(skip(state, session), fields(session = %session.id))]
pub async fn cancel_edit(
    state: web::Data<AppState>,
    session: AdminSession,
) -> Result<impl Responder, AppError> {
    let component = state.project_editors.editor(&session.id);
    let mut editor = component.write().await?;
    editor.cancel();

    Ok(session.respond(&editor.snapshot(None)))
}

#[instrument(skip(state, session, project_id, query), fields(session = %session.id))]
pub async fn delete_project(
    state: web::Data<AppState>,
    session: AdminSession,
    project_id: web::Path<String>,
    query: web::Query<DeleteQuery>,
) -> Result<impl Responder, AppError> {
    query.require_confirmation()?;
    let id = valid_record_id(&project_id)?;

    let component = state.project_editors.editor(&session.id);
    let mut editor = component.write().await?;
    let notification = editor.delete(&id).await;

    Ok(session.respond(&editor.snapshot(Some(notification))))
}

#[instrument(skip(state))]
pub async fn dashboard(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let stats = state.portfolio.dashboard_stats().await?;

    Ok(HttpResponse::Ok().json(DashboardResponse::new(&stats, Utc::now())))
}
