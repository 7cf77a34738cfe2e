use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

use super::decode::{decode_course_notes, decode_export, decode_hole_edit, wants_json};
use crate::error::ScorecardError;
use crate::mvu::{Msg, ScorecardOutput, ScorecardStore};
use crate::score::ScorecardData;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};

fn bad_request(e: &ScorecardError) -> HttpResponse {
    warn!(error = %e, "rejected scorecard request");
    HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
}

fn server_error(e: &ScorecardError) -> HttpResponse {
    warn!(error = %e, "scorecard dispatch failed");
    HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
}

/// Rendered fragments as html, or 204 when the dispatch changed nothing visible.
fn fragments_response(output: ScorecardOutput) -> HttpResponse {
    if output.is_empty() {
        return HttpResponse::NoContent().finish();
    }
    HttpResponse::Ok()
        .content_type("text/html")
        .body(output.into_html())
}

fn dispatch(store: &ScorecardStore, msg: Msg) -> HttpResponse {
    match store.dispatch(msg) {
        Ok(output) => fragments_response(output),
        Err(e) => server_error(&e),
    }
}

pub async fn index() -> impl Responder {
    let markup = render_index_template(DEFAULT_INDEX_TITLE);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn scorecard(
    query: web::Query<HashMap<String, String>>,
    store: Data<ScorecardStore>,
) -> impl Responder {
    let query = query.into_inner();
    if wants_json(&query) {
        let round = store.snapshot();
        return HttpResponse::Ok().json(ScorecardData::new(&round));
    }
    dispatch(&store, Msg::PageLoad)
}

pub async fn update_hole(
    path: web::Path<(String, String)>,
    form: web::Form<HashMap<String, String>>,
    store: Data<ScorecardStore>,
) -> impl Responder {
    let (number, field) = path.into_inner();
    let form = form.into_inner();
    match decode_hole_edit(&number, &field, &form) {
        Ok(Some(msg)) => dispatch(&store, msg),
        Ok(None) => fragments_response(ScorecardOutput::default()),
        Err(e) => bad_request(&e),
    }
}

pub async fn update_course_notes(
    form: web::Form<HashMap<String, String>>,
    store: Data<ScorecardStore>,
) -> impl Responder {
    let form = form.into_inner();
    dispatch(&store, decode_course_notes(&form))
}

pub async fn export(path: web::Path<String>, store: Data<ScorecardStore>) -> impl Responder {
    let format = path.into_inner();
    let msg = match decode_export(&format) {
        Ok(msg) => msg,
        Err(e) => return bad_request(&e),
    };

    let output = match store.dispatch(msg) {
        Ok(output) => output,
        Err(e) => return server_error(&e),
    };

    match output.download {
        Some(export) => HttpResponse::Ok()
            .content_type(format!("{}; charset=utf-8", export.mime_type()))
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(export.filename)],
            })
            .body(export.body),
        None => server_error(&ScorecardError::Other("export produced no file".into())),
    }
}
