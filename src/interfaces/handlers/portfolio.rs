use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.portfolio.projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.portfolio.skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state))]
pub async fn get_content(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let content = state.portfolio.content().await?;
    Ok(HttpResponse::Ok().json(content))
}
