use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/portfolio")
            .route("/projects", web::get().to(portfolio::get_projects))
            .route("/skills", web::get().to(portfolio::get_skills))
            .route("/content", web::get().to(portfolio::get_content))
    );
}
