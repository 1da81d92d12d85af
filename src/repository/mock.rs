use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, CharmReader, CharmWriter, DiscountReader, DiscountWriter,
    ProductReader, ProductWriter, RepositoryResult,
};
use crate::domain::{
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    charm::{Charm, NewCharm},
    discount::{CategoryDiscount, DiscountListQuery, NewCategoryDiscount},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
        fn set_product_category(&self, product_id: i32, category_id: Option<i32>) -> RepositoryResult<Product>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub DiscountReader {}

    impl DiscountReader for DiscountReader {
        fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryDiscount>>;
        fn list_discounts(&self, query: DiscountListQuery) -> RepositoryResult<(usize, Vec<CategoryDiscount>)>;
    }
}

mock! {
    pub DiscountWriter {}

    impl DiscountWriter for DiscountWriter {
        fn create_discount(&self, new_discount: &NewCategoryDiscount) -> RepositoryResult<CategoryDiscount>;
        fn set_discount_categories(&self, discount_id: i32, category_ids: &[i32]) -> RepositoryResult<CategoryDiscount>;
    }
}

mock! {
    pub CharmReader {}

    impl CharmReader for CharmReader {
        fn get_charm_by_id(&self, id: i32) -> RepositoryResult<Option<Charm>>;
        fn list_charms_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Charm>>;
    }
}

mock! {
    pub CharmWriter {}

    impl CharmWriter for CharmWriter {
        fn create_charm(&self, new_charm: &NewCharm) -> RepositoryResult<Charm>;
        fn delete_charm(&self, charm_id: i32) -> RepositoryResult<()>;
    }
}
