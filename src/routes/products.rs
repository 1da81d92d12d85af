use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use chrono::Local;

use crate::forms::products::{AddProductForm, AssignCategoryForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products;

#[get("/products")]
/// Return a JSON page of products with discounts resolved at the current time.
pub async fn list_products(
    params: web::Query<products::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let now = Local::now().naive_utc();
    match products::list_products(repo.get_ref(), params.into_inner(), now) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("Failed to list products", err),
    }
}

#[get("/products/{id}")]
/// Return a single product with its discount resolved at the current time.
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let now = Local::now().naive_utc();
    match products::get_product(repo.get_ref(), path.into_inner(), now) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response("Failed to fetch product", err),
    }
}

#[post("/products")]
/// Create a product from a JSON payload.
pub async fn add_product(
    form: web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response("Failed to create product", err),
    }
}

#[put("/products/{id}")]
/// Update a product from a JSON payload.
pub async fn edit_product(
    path: web::Path<i32>,
    form: web::Json<EditProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::update_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to update product", err),
    }
}

#[delete("/products/{id}")]
/// Delete a product.
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::delete_product(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete product", err),
    }
}

#[put("/products/{id}/category")]
/// Assign the product to a category; a null body value clears the assignment.
pub async fn assign_product_category(
    path: web::Path<i32>,
    form: web::Json<AssignCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::assign_category(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to assign product category", err),
    }
}
