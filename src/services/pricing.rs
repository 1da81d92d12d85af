//! Discount resolution and price computation.
//!
//! This is the one place in the catalog with real decision logic: matching
//! category-scoped discounts to products and turning a matched discount into
//! a final price. Both functions are pure; the evaluation instant is an
//! explicit parameter so callers (and tests) control the clock.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::discount::CategoryDiscount;
use crate::domain::product::Product;

/// A product paired with the single discount chosen for it, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPair<'a> {
    /// The product being priced.
    pub product: &'a Product,
    /// The discount selected for the product, or `None` when nothing applies.
    pub discount: Option<&'a CategoryDiscount>,
}

impl<'a> ResolvedPair<'a> {
    /// Final price of the product with the chosen discount applied.
    pub fn final_price_cents(&self) -> i64 {
        final_price_cents(self.product.price_cents, self.discount)
    }
}

/// Pair every product with at most one discount applicable at `now`.
///
/// Returns `None` when `discounts` is empty: no discount machinery is active,
/// which callers treat differently from "every product resolved to no
/// discount". Otherwise the result holds exactly one pair per product, in
/// product input order.
///
/// A discount is a candidate for a product when the product's category is in
/// the discount's scope, the discount is enabled, and its validity window
/// contains `now` (both bounds inclusive). When several candidates remain,
/// the one appearing first in the `discounts` input wins; products without a
/// category never match.
pub fn match_discounts<'a>(
    products: &'a [Product],
    discounts: &'a [CategoryDiscount],
    now: NaiveDateTime,
) -> Option<Vec<ResolvedPair<'a>>> {
    if discounts.is_empty() {
        return None;
    }

    // Index the discounts by category once, preserving input order per
    // category so the first-configured candidate stays first.
    let mut by_category: HashMap<i32, Vec<&CategoryDiscount>> = HashMap::new();
    for discount in discounts {
        for category_id in &discount.category_ids {
            by_category.entry(*category_id).or_default().push(discount);
        }
    }

    let pairs = products
        .iter()
        .map(|product| {
            let discount = product.category_id.and_then(|category_id| {
                by_category
                    .get(&category_id)?
                    .iter()
                    .find(|candidate| candidate.is_valid_at(now))
                    .copied()
            });

            ResolvedPair { product, discount }
        })
        .collect();

    Some(pairs)
}

/// Apply a discount percentage to a base price in cents.
///
/// Without a discount the base price is returned unchanged. Otherwise the
/// percentage is taken off and the result rounded half-away-from-zero to
/// whole cents. A percent value outside 0..=100 is clamped rather than
/// rejected, so the result never goes negative or above the base price.
pub fn final_price_cents(price_cents: i64, discount: Option<&CategoryDiscount>) -> i64 {
    let Some(discount) = discount else {
        return price_cents;
    };

    let percent = i64::from(discount.percent_value.clamp(0, 100));
    (price_cents * (100 - percent) + 50) / 100
}
