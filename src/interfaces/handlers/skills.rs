use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::skill::SkillForm,
    errors::AppError,
    handlers::DeleteQuery,
    utils::valid_id::valid_record_id,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let mut manager = state.skills_manager.read().await;
    manager.list().await;

    Ok(HttpResponse::Ok().json(manager.snapshot(None)))
}

#[instrument(skip(state, form))]
pub async fn add_skill(
    state: web::Data<AppState>,
    form: web::Json<SkillForm>,
) -> Result<impl Responder, AppError> {
    let mut manager = state.skills_manager.write().await?;
    let notification = manager.add(form.into_inner()).await;

    Ok(HttpResponse::Ok().json(manager.snapshot(Some(notification))))
}

#[instrument(skip(state, skill_id, query))]
pub async fn delete_skill(
    state: web::Data<AppState>,
    skill_id: web::Path<String>,
    query: web::Query<DeleteQuery>,
) -> Result<impl Responder, AppError> {
    query.require_confirmation()?;
    let id = valid_record_id(&skill_id)?;

    let mut manager = state.skills_manager.write().await?;
    let notification = manager.delete(&id).await;

    Ok(HttpResponse::Ok().json(manager.snapshot(Some(notification))))
}
