use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::discounts;

#[get("/discounts")]
/// Return a JSON page of discounts; discount administration is not exposed
/// over HTTP.
pub async fn list_discounts(
    params: web::Query<discounts::DiscountsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let now = Local::now().naive_utc();
    match discounts::list_discounts(repo.get_ref(), params.into_inner(), now) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("Failed to list discounts", err),
    }
}
