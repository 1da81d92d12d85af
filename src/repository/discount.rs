use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::discount::{
        CategoryDiscount as DomainCategoryDiscount, DiscountListQuery,
        NewCategoryDiscount as DomainNewCategoryDiscount,
    },
    models::discount::{
        Discount as DbDiscount, DiscountCategory as DbDiscountCategory,
        NewDiscount as DbNewDiscount, NewDiscountCategory as DbNewDiscountCategory,
    },
    repository::{DieselRepository, DiscountReader, DiscountWriter, RepositoryError,
        RepositoryResult},
};

impl DiscountReader for DieselRepository {
    fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategoryDiscount>> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;
        let discount = discounts::table
            .filter(discounts::id.eq(id))
            .first::<DbDiscount>(&mut conn)
            .optional()?;

        if let Some(db_discount) = discount {
            let mut categories = load_categories_for_discounts(&mut conn, &[db_discount.id])?;
            let category_ids = categories.remove(&db_discount.id).unwrap_or_default();
            Ok(Some(db_discount.into_domain(category_ids)))
        } else {
            Ok(None)
        }
    }

    fn list_discounts(
        &self,
        query: DiscountListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainCategoryDiscount>)> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;

        let mut count_query = discounts::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(now) = query.valid_at {
            count_query = count_query
                .filter(discounts::is_active.eq(true))
                .filter(discounts::available_from.le(now))
                .filter(discounts::available_to.ge(now));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = discounts::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(now) = query.valid_at {
            items = items
                .filter(discounts::is_active.eq(true))
                .filter(discounts::available_from.le(now))
                .filter(discounts::available_to.ge(now));
        }

        // Listing order doubles as the tie-break order in the pricing engine,
        // so it must stay deterministic.
        items = items.order(discounts::id.asc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_discounts = items.load::<DbDiscount>(&mut conn)?;

        if db_discounts.is_empty() {
            return Ok((total, Vec::new()));
        }

        let discount_ids: Vec<i32> = db_discounts.iter().map(|discount| discount.id).collect();
        let mut category_map = load_categories_for_discounts(&mut conn, &discount_ids)?;

        let mut domain_discounts = Vec::with_capacity(db_discounts.len());
        for db_discount in db_discounts {
            let category_ids = category_map.remove(&db_discount.id).unwrap_or_default();
            domain_discounts.push(db_discount.into_domain(category_ids));
        }

        Ok((total, domain_discounts))
    }
}

impl DiscountWriter for DieselRepository {
    fn create_discount(
        &self,
        new_discount: &DomainNewCategoryDiscount,
    ) -> RepositoryResult<DomainCategoryDiscount> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;
        let db_new = DbNewDiscount::from(new_discount);

        let created = diesel::insert_into(discounts::table)
            .values(&db_new)
            .get_result::<DbDiscount>(&mut conn)?;

        Ok(created.into_domain(Vec::new()))
    }

    fn set_discount_categories(
        &self,
        discount_id: i32,
        category_ids: &[i32],
    ) -> RepositoryResult<DomainCategoryDiscount> {
        use crate::schema::{discount_categories, discounts};

        let mut conn = self.conn()?;

        conn.transaction::<DomainCategoryDiscount, RepositoryError, _>(|conn| {
            let db_discount = discounts::table
                .filter(discounts::id.eq(discount_id))
                .first::<DbDiscount>(conn)?;

            diesel::delete(
                discount_categories::table
                    .filter(discount_categories::discount_id.eq(discount_id)),
            )
            .execute(conn)?;

            let rows: Vec<DbNewDiscountCategory> = category_ids
                .iter()
                .map(|category_id| DbNewDiscountCategory {
                    discount_id,
                    category_id: *category_id,
                })
                .collect();

            diesel::insert_into(discount_categories::table)
                .values(&rows)
                .execute(conn)?;

            let mut categories = load_categories_for_discounts(conn, &[discount_id])?;
            let category_ids = categories.remove(&discount_id).unwrap_or_default();

            Ok(db_discount.into_domain(category_ids))
        })
    }
}

fn load_categories_for_discounts(
    conn: &mut SqliteConnection,
    discount_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<i32>>> {
    use crate::schema::discount_categories;

    if discount_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = discount_categories::table
        .filter(discount_categories::discount_id.eq_any(discount_ids))
        .order(discount_categories::id.asc())
        .load::<DbDiscountCategory>(conn)?;

    let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
    for row in rows {
        map.entry(row.discount_id).or_default().push(row.category_id);
    }

    Ok(map)
}
