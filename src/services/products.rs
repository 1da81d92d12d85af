use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::discount::{CategoryDiscount, DiscountListQuery};
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, AssignCategoryForm, EditProductForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, DiscountReader, ProductReader, ProductWriter};
use crate::services::pricing;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional search string applied to names and descriptions.
    pub search: Option<String>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
    /// Whether unavailable items should be included in the response.
    #[serde(default)]
    pub show_unavailable: bool,
}

/// Discount details echoed on a priced product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppliedDiscount {
    pub id: i32,
    pub name: String,
    pub name_eng: String,
    pub percent_value: i32,
}

impl From<&CategoryDiscount> for AppliedDiscount {
    fn from(value: &CategoryDiscount) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            name_eng: value.name_eng.clone(),
            percent_value: value.percent_value,
        }
    }
}

/// Product representation returned by the API, with pricing resolved.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub name_eng: String,
    pub description: Option<String>,
    pub description_eng: Option<String>,
    pub price_cents: i64,
    pub final_price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
    pub category_id: Option<i32>,
    pub discount: Option<AppliedDiscount>,
}

impl ProductView {
    fn new(product: Product, discount: Option<AppliedDiscount>, final_price_cents: i64) -> Self {
        Self {
            id: product.id,
            name: product.name,
            name_eng: product.name_eng,
            description: product.description,
            description_eng: product.description_eng,
            price_cents: product.price_cents,
            final_price_cents,
            is_available: product.is_available,
            image_url: product.image_url,
            thumb_url: product.thumb_url,
            category_id: product.category_id,
            discount,
        }
    }

    fn undiscounted(product: Product) -> Self {
        let final_price_cents = product.price_cents;
        Self::new(product, None, final_price_cents)
    }
}

/// Resolve discounts for a batch of products and build the API views.
///
/// `match_discounts` returning `None` means no discount machinery is active;
/// every product then keeps its base price.
pub fn price_products(
    products: Vec<Product>,
    discounts: &[CategoryDiscount],
    now: NaiveDateTime,
) -> Vec<ProductView> {
    let Some(pairs) = pricing::match_discounts(&products, discounts, now) else {
        return products.into_iter().map(ProductView::undiscounted).collect();
    };

    let resolved: Vec<(Option<AppliedDiscount>, i64)> = pairs
        .iter()
        .map(|pair| {
            (
                pair.discount.map(AppliedDiscount::from),
                pair.final_price_cents(),
            )
        })
        .collect();

    products
        .into_iter()
        .zip(resolved)
        .map(|(product, (discount, final_price_cents))| {
            ProductView::new(product, discount, final_price_cents)
        })
        .collect()
}

/// Lists products with discounts resolved at `now`.
pub fn list_products<R>(
    repo: &R,
    query: ProductsQuery,
    now: NaiveDateTime,
) -> ServiceResult<Paginated<ProductView>>
where
    R: ProductReader + DiscountReader + ?Sized,
{
    let ProductsQuery {
        search,
        page,
        show_unavailable,
    } = query;

    let page = page.unwrap_or(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(search_term) = search.as_ref() {
        list_query = list_query.search(search_term);
    }

    if show_unavailable {
        list_query = list_query.include_unavailable();
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let (_, discounts) = repo
        .list_discounts(DiscountListQuery::new())
        .map_err(ServiceError::from)?;

    let views = price_products(items, &discounts, now);
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(views, page, total_pages))
}

/// Fetches a single product with its discount resolved at `now`.
pub fn get_product<R>(repo: &R, product_id: i32, now: NaiveDateTime) -> ServiceResult<ProductView>
where
    R: ProductReader + DiscountReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let (_, discounts) = repo
        .list_discounts(DiscountListQuery::new())
        .map_err(ServiceError::from)?;

    let mut views = price_products(vec![product], &discounts, now);
    // price_products returns exactly one view per input product.
    views.pop().ok_or(ServiceError::NotFound)
}

/// Creates a new product.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Updates an existing product.
pub fn update_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

/// Assigns a product to a category, or clears the assignment.
///
/// The category must exist; a dangling identifier is a `NotFound`, not a
/// silent no-op.
pub fn assign_category<R>(
    repo: &R,
    product_id: i32,
    form: AssignCategoryForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + CategoryReader + ?Sized,
{
    if let Some(category_id) = form.category_id {
        repo.get_category_by_id(category_id)
            .map_err(ServiceError::from)?
            .ok_or(ServiceError::NotFound)?;
    }

    repo.set_product_category(product_id, form.category_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate, NaiveDateTime};
    use mockall::predicate::eq;

    use crate::domain::category::{Category, CategoryListQuery};
    use crate::domain::product::{NewProduct, UpdateProduct};
    use crate::repository::mock::{
        MockCategoryReader, MockDiscountReader, MockProductReader, MockProductWriter,
    };
    use crate::repository::{RepositoryError, RepositoryResult};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time")
    }

    fn sample_product(id: i32, price_cents: i64, category_id: Option<i32>) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            name_eng: format!("Product {id}"),
            description: None,
            description_eng: None,
            price_cents,
            is_available: true,
            image_url: None,
            thumb_url: None,
            category_id,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_discount(id: i32, percent_value: i32, category_ids: Vec<i32>) -> CategoryDiscount {
        let now = fixed_datetime();
        CategoryDiscount {
            id,
            name: format!("Promo {id}"),
            name_eng: format!("Promo {id}"),
            description: None,
            description_eng: None,
            percent_value,
            is_active: true,
            available_from: now - Days::new(10),
            available_to: now + Days::new(10),
            category_ids,
            created_at: now,
            updated_at: now,
        }
    }

    struct MockProductRepo {
        products: MockProductReader,
        discounts: MockDiscountReader,
    }

    impl ProductReader for MockProductRepo {
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

    impl DiscountReader for MockProductRepo {
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

    struct MockAssignRepo {
        writer: MockProductWriter,
        categories: MockCategoryReader,
    }

    impl ProductWriter for MockAssignRepo {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
            self.writer.create_product(new_product)
        }

        fn update_product(
            &self,
            product_id: i32,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product> {
            self.writer.update_product(product_id, updates)
        }

        fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
            self.writer.delete_product(product_id)
        }

        fn set_product_category(
            &self,
            product_id: i32,
            category_id: Option<i32>,
        ) -> RepositoryResult<Product> {
            self.writer.set_product_category(product_id, category_id)
        }
    }

    impl CategoryReader for MockAssignRepo {
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

    #[test]
    fn list_products_resolves_discounts_and_prices() {
        let mut products = MockProductReader::new();
        products.expect_list_products().returning(|_| {
            Ok((
                2,
                vec![sample_product(1, 5000, Some(1)), sample_product(2, 3000, None)],
            ))
        });

        let mut discounts = MockDiscountReader::new();
        discounts
            .expect_list_discounts()
            .returning(|_| Ok((1, vec![sample_discount(1, 30, vec![1])])));

        let repo = MockProductRepo {
            products,
            discounts,
        };

        let page = list_products(&repo, ProductsQuery::default(), fixed_datetime())
            .expect("expected listing to succeed");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].final_price_cents, 3500);
        assert_eq!(
            page.items[0].discount.as_ref().map(|d| d.id),
            Some(1)
        );
        assert_eq!(page.items[1].final_price_cents, 3000);
        assert!(page.items[1].discount.is_none());
    }

    #[test]
    fn list_products_without_discounts_keeps_base_prices() {
        let mut products = MockProductReader::new();
        products
            .expect_list_products()
            .returning(|_| Ok((1, vec![sample_product(1, 5000, Some(1))])));

        let mut discounts = MockDiscountReader::new();
        discounts
            .expect_list_discounts()
            .returning(|_| Ok((0, Vec::new())));

        let repo = MockProductRepo {
            products,
            discounts,
        };

        let page = list_products(&repo, ProductsQuery::default(), fixed_datetime())
            .expect("expected listing to succeed");

        assert_eq!(page.items[0].final_price_cents, 5000);
        assert!(page.items[0].discount.is_none());
    }

    #[test]
    fn get_product_returns_not_found_for_missing_id() {
        let mut products = MockProductReader::new();
        products
            .expect_get_product_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let repo = MockProductRepo {
            products,
            discounts: MockDiscountReader::new(),
        };

        let result = get_product(&repo, 42, fixed_datetime());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn assign_category_requires_existing_category() {
        let mut categories = MockCategoryReader::new();
        categories
            .expect_get_category_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));

        let repo = MockAssignRepo {
            writer: MockProductWriter::new(),
            categories,
        };

        let result = assign_category(&repo, 1, AssignCategoryForm { category_id: Some(5) });

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn assign_category_clears_assignment_without_lookup() {
        let mut writer = MockProductWriter::new();
        writer
            .expect_set_product_category()
            .with(eq(1), eq(None))
            .returning(|product_id, _| Ok(sample_product(product_id, 1000, None)));

        let repo = MockAssignRepo {
            writer,
            categories: MockCategoryReader::new(),
        };

        let product = assign_category(&repo, 1, AssignCategoryForm { category_id: None })
            .expect("expected unassignment to succeed");

        assert!(product.category_id.is_none());
    }

    #[test]
    fn delete_product_propagates_not_found() {
        let mut writer = MockProductWriter::new();
        writer
            .expect_delete_product()
            .with(eq(9))
            .returning(|_| Err(RepositoryError::NotFound));

        let repo = MockAssignRepo {
            writer,
            categories: MockCategoryReader::new(),
        };

        let result = delete_product(&repo, 9);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
