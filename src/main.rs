use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use charm_catalog::db::establish_connection_pool;
use charm_catalog::repository::DieselRepository;
use charm_catalog::routes::categories::{
    add_category, delete_category, edit_category, list_categories, products_by_category,
};
use charm_catalog::routes::charms::{add_charm, delete_charm, get_charm, list_charms};
use charm_catalog::routes::discounts::list_discounts;
use charm_catalog::routes::products::{
    add_product, assign_product_category, delete_product, edit_product, get_product, list_products,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1")
                    .service(list_products)
                    .service(get_product)
                    .service(add_product)
                    .service(edit_product)
                    .service(delete_product)
                    .service(assign_product_category)
                    .service(list_categories)
                    .service(add_category)
                    .service(edit_category)
                    .service(delete_category)
                    .service(products_by_category)
                    .service(list_charms)
                    .service(add_charm)
                    .service(get_charm)
                    .service(delete_charm)
                    .service(list_discounts),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
