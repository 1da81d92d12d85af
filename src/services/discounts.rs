use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::discount::{CategoryDiscount, DiscountListQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::DiscountReader;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the discount listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct DiscountsQuery {
    /// When set, only discounts enabled and valid right now are returned.
    #[serde(default)]
    pub valid_only: bool,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// Lists discounts; read-only, administration happens elsewhere.
pub fn list_discounts<R>(
    repo: &R,
    query: DiscountsQuery,
    now: NaiveDateTime,
) -> ServiceResult<Paginated<CategoryDiscount>>
where
    R: DiscountReader + ?Sized,
{
    let DiscountsQuery { valid_only, page } = query;

    let page = page.unwrap_or(1);
    let mut list_query = DiscountListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if valid_only {
        list_query = list_query.valid_at(now);
    }

    let (total, items) = repo
        .list_discounts(list_query)
        .map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(items, page, total_pages))
}
