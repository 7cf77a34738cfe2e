use actix_files::Files;
use actix_web::{HttpResponse, web};

use crate::controller::scorecard::http_handlers::{
    export, index, scorecard, update_course_notes, update_hole,
};

/// Route table for the scorecard app. Expects `Data<ScorecardStore>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/scorecard", web::get().to(scorecard))
        .route("/holes/{number}/{field}", web::post().to(update_hole))
        .route("/course-notes", web::post().to(update_course_notes))
        .route("/export/{format}", web::get().to(export))
        .route("/health", web::get().to(HttpResponse::Ok));
}

/// Stylesheet and other assets, served from `./static`.
pub fn configure_static(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/static", "./static"));
}
