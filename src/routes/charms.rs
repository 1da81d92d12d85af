use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::charms::AddCharmForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::charms;

#[get("/categories/{id}/charms")]
/// Return the charms offered with a category.
pub async fn list_charms(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match charms::list_charms_by_category(repo.get_ref(), path.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response("Failed to list charms", err),
    }
}

#[post("/categories/{id}/charms")]
/// Add a charm to a category from a JSON payload.
pub async fn add_charm(
    path: web::Path<i32>,
    form: web::Json<AddCharmForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match charms::create_charm(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(charm) => HttpResponse::Created().json(charm),
        Err(err) => error_response("Failed to create charm", err),
    }
}

#[get("/charms/{id}")]
/// Return a single charm.
pub async fn get_charm(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match charms::get_charm(repo.get_ref(), path.into_inner()) {
        Ok(charm) => HttpResponse::Ok().json(charm),
        Err(err) => error_response("Failed to fetch charm", err),
    }
}

#[delete("/charms/{id}")]
/// Delete a charm.
pub async fn delete_charm(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match charms::delete_charm(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete charm", err),
    }
}
