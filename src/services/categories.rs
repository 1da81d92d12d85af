use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::category::{Category, CategoryListQuery};
use crate::domain::discount::DiscountListQuery;
use crate::domain::product::ProductListQuery;
use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, CategoryWriter, DiscountReader, ProductReader};
use crate::services::products::{ProductView, price_products};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the category listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    /// Optional search string applied to category names.
    pub search: Option<String>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// Lists categories.
pub fn list_categories<R>(repo: &R, query: CategoriesQuery) -> ServiceResult<Paginated<Category>>
where
    R: CategoryReader + ?Sized,
{
    let CategoriesQuery { search, page } = query;

    let page = page.unwrap_or(1);
    let mut list_query = CategoryListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(search_term) = search.as_ref() {
        list_query = list_query.search(search_term);
    }

    let (total, items) = repo
        .list_categories(list_query)
        .map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(items, page, total_pages))
}

/// Creates a new category.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Renames an existing category.
pub fn update_category<R>(
    repo: &R,
    category_id: i32,
    form: EditCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let updates = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a category.
pub fn delete_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id).map_err(ServiceError::from)
}

/// Lists the products of one category with discounts resolved at `now`.
///
/// Missing categories are a `NotFound` rather than an empty listing.
pub fn products_by_category<R>(
    repo: &R,
    category_id: i32,
    now: NaiveDateTime,
) -> ServiceResult<Vec<ProductView>>
where
    R: CategoryReader + ProductReader + DiscountReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let (_, products) = repo
        .list_products(ProductListQuery::new().category(category_id))
        .map_err(ServiceError::from)?;
    let (_, discounts) = repo
        .list_discounts(DiscountListQuery::new())
        .map_err(ServiceError::from)?;

    Ok(price_products(products, &discounts, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use mockall::predicate::eq;

    use crate::domain::discount::CategoryDiscount;
    use crate::domain::product::Product;
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockCategoryReader, MockDiscountReader, MockProductReader};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time")
    }

    fn sample_category(id: i32) -> Category {
        Category {
            id,
            name: format!("Категория {id}"),
            name_eng: format!("Category {id}"),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    struct MockCatalogRepo {
        categories: MockCategoryReader,
        products: MockProductReader,
        discounts: MockDiscountReader,
    }

    impl CategoryReader for MockCatalogRepo {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
            self.categories.get_category_by_id(id)
        }

        fn list_categories(
            &self,
            query: CategoryListQuery,
        ) -> RepositoryResult<(usize, Vec<Category>)> {
            self.categories.list_categories(query)
        }
    }

    impl ProductReader for MockCatalogRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
            self.products.get_product_by_id(id)
        }

        fn list_products(
            &self,
            query: ProductListQuery,
        ) -> RepositoryResult<(usize, Vec<Product>)> {
            self.products.list_products(query)
        }
    }

    impl DiscountReader for MockCatalogRepo {
        fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryDiscount>> {
            self.discounts.get_discount_by_id(id)
        }

        fn list_discounts(
            &self,
            query: DiscountListQuery,
        ) -> RepositoryResult<(usize, Vec<CategoryDiscount>)> {
            self.discounts.list_discounts(query)
        }
    }

    #[test]
    fn products_by_category_rejects_missing_category() {
        let mut categories = MockCategoryReader::new();
        categories
            .expect_get_category_by_id()
            .with(eq(77))
            .returning(|_| Ok(None));

        let repo = MockCatalogRepo {
            categories,
            products: MockProductReader::new(),
            discounts: MockDiscountReader::new(),
        };

        let result = products_by_category(&repo, 77, fixed_datetime());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn products_by_category_prices_the_listing() {
        let now = fixed_datetime();

        let mut categories = MockCategoryReader::new();
        categories
            .expect_get_category_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(sample_category(id))));

        let mut products = MockProductReader::new();
        products.expect_list_products().returning(move |_| {
            Ok((
                1,
                vec![Product {
                    id: 10,
                    name: "Bracelet".to_string(),
                    name_eng: "Bracelet".to_string(),
                    description: None,
                    description_eng: None,
                    price_cents: 3300,
                    is_available: true,
                    image_url: None,
                    thumb_url: None,
                    category_id: Some(1),
                    created_at: now,
                    updated_at: now,
                }],
            ))
        });

        let mut discounts = MockDiscountReader::new();
        discounts.expect_list_discounts().returning(move |_| {
            Ok((
                1,
                vec![CategoryDiscount {
                    id: 1,
                    name: "Summer".to_string(),
                    name_eng: "Summer".to_string(),
                    description: None,
                    description_eng: None,
                    percent_value: 30,
                    is_active: true,
                    available_from: now - Days::new(10),
                    available_to: now + Days::new(10),
                    category_ids: vec![1],
                    created_at: now,
                    updated_at: now,
                }],
            ))
        });

        let repo = MockCatalogRepo {
            categories,
            products,
            discounts,
        };

        let views =
            products_by_category(&repo, 1, now).expect("expected the listing to succeed");

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].final_price_cents, 2310);
        assert_eq!(views[0].discount.as_ref().map(|d| d.percent_value), Some(30));
    }

    #[test]
    fn list_categories_paginates() {
        let mut categories = MockCategoryReader::new();
        categories
            .expect_list_categories()
            .returning(|_| Ok((60, vec![sample_category(1), sample_category(2)])));

        let repo = MockCatalogRepo {
            categories,
            products: MockProductReader::new(),
            discounts: MockDiscountReader::new(),
        };

        let page = list_categories(
            &repo,
            CategoriesQuery {
                search: None,
                page: Some(2),
            },
        )
        .expect("expected listing to succeed");

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
    }
}
