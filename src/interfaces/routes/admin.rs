use actix_web::web;

use crate::handlers::{projects, site_content, skills, system::admin_health_check};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(admin_health_check)
            .service(
                web::resource("/dashboard")
                    .route(web::get().to(projects::dashboard))
            )
            .service(
                web::resource("/projects")
                    .route(web::get().to(projects::list_projects))
                    .route(web::post().to(projects::submit_project))
            )
            .service(
                web::resource("/projects/new")
                    .route(web::post().to(projects::begin_create))
            )
            .service(
                web::resource("/projects/cancel")
                    .route(web::post().to(projects::cancel_edit))
            )
            .service(
                web::resource("/projects/{project_id}/edit")
                    .route(web::get().to(projects::begin_edit))
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::delete().to(projects::delete_project))
            )
            .service(
                web::resource("/skills")
                    .route(web::get().to(skills::list_skills))
                    .route(web::post().to(skills::add_skill))
            )
            .service(
                web::resource("/skills/{skill_id}")
                    .route(web::delete().to(skills::delete_skill))
            )
            .service(
                web::resource("/content")
                    .route(web::get().to(site_content::get_content))
                    .route(web::put().to(site_content::save_content))
            )
    );
}
