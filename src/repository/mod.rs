use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::charm::{Charm, NewCharm};
use crate::domain::discount::{CategoryDiscount, DiscountListQuery, NewCategoryDiscount};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};

pub mod errors;

pub mod category;
pub mod charm;
pub mod discount;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    /// Assign the product to a category, or clear the assignment with `None`.
    fn set_product_category(
        &self,
        product_id: i32,
        category_id: Option<i32>,
    ) -> RepositoryResult<Product>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over category discounts.
///
/// Returned discounts carry their category scope fully materialized so the
/// pricing engine never has to reach back into storage.
pub trait DiscountReader {
    fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryDiscount>>;
    fn list_discounts(
        &self,
        query: DiscountListQuery,
    ) -> RepositoryResult<(usize, Vec<CategoryDiscount>)>;
}

/// Write operations over category discounts.
///
/// Only the persistence seam writes discounts; administrative workflows sit
/// outside this service and there is no HTTP surface for them.
pub trait DiscountWriter {
    fn create_discount(
        &self,
        new_discount: &NewCategoryDiscount,
    ) -> RepositoryResult<CategoryDiscount>;
    /// Replace the set of categories the discount applies to.
    fn set_discount_categories(
        &self,
        discount_id: i32,
        category_ids: &[i32],
    ) -> RepositoryResult<CategoryDiscount>;
}

/// Read-only operations over charm records.
pub trait CharmReader {
    fn get_charm_by_id(&self, id: i32) -> RepositoryResult<Option<Charm>>;
    fn list_charms_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Charm>>;
}

/// Write operations over charm records.
pub trait CharmWriter {
    fn create_charm(&self, new_charm: &NewCharm) -> RepositoryResult<Charm>;
    fn delete_charm(&self, charm_id: i32) -> RepositoryResult<()>;
}
