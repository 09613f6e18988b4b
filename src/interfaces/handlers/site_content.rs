use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::site_content::SiteContentForm, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_content(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let mut manager = state.content_manager.read().await;
    manager.load().await;

    Ok(HttpResponse::Ok().json(manager.snapshot(None)))
}

#[instrument(skip(state, form))]
pub async fn save_content(
    state: web::Data<AppState>,
    form: web::Json<SiteContentForm>,
) -> Result<impl Responder, AppError> {
    let mut manager = state.content_manager.write().await?;
    let notification = manager.save(form.into_inner()).await;

    Ok(HttpResponse::Ok().json(manager.snapshot(Some(notification))))
}
