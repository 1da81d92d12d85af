use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use chrono::Local;

use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories;

#[get("/categories")]
/// Return a JSON page of categories.
pub async fn list_categories(
    params: web::Query<categories::CategoriesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::list_categories(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("Failed to list categories", err),
    }
}

#[post("/categories")]
/// Create a category from a JSON payload.
pub async fn add_category(
    form: web::Json<AddCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response("Failed to create category", err),
    }
}

#[put("/categories/{id}")]
/// Rename a category.
pub async fn edit_category(
    path: web::Path<i32>,
    form: web::Json<EditCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::update_category(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response("Failed to update category", err),
    }
}

#[delete("/categories/{id}")]
/// Delete a category.
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::delete_category(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete category", err),
    }
}

#[get("/categories/{id}/products")]
/// Return the category's products with discounts resolved at the current time.
pub async fn products_by_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let now = Local::now().naive_utc();
    match categories::products_by_category(repo.get_ref(), path.into_inner(), now) {
        Ok(views) => HttpResponse::Ok().json(views),
        Err(err) => error_response("Failed to list products by category", err),
    }
}
