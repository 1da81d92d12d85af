use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::discount::{
    CategoryDiscount as DomainCategoryDiscount, NewCategoryDiscount as DomainNewCategoryDiscount,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::discounts)]
pub struct Discount {
    pub id: i32,
    pub name: String,
    pub name_eng: String,
    pub description: Option<String>,
    pub description_eng: Option<String>,
    pub percent_value: i32,
    pub is_active: bool,
    pub available_from: NaiveDateTime,
    pub available_to: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::discounts)]
pub struct NewDiscount<'a> {
    pub name: &'a str,
    pub name_eng: &'a str,
    pub description: Option<&'a str>,
    pub description_eng: Option<&'a str>,
    pub percent_value: i32,
    pub is_active: bool,
    pub available_from: NaiveDateTime,
    pub available_to: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::discount_categories)]
#[diesel(belongs_to(Discount))]
pub struct DiscountCategory {
    pub id: i32,
    pub discount_id: i32,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::discount_categories)]
pub struct NewDiscountCategory {
    pub discount_id: i32,
    pub category_id: i32,
}

impl Discount {
    /// Convert the row into a domain discount carrying its category scope.
    pub fn into_domain(self, category_ids: Vec<i32>) -> DomainCategoryDiscount {
        DomainCategoryDiscount {
            id: self.id,
            name: self.name,
            name_eng: self.name_eng,
            description: self.description,
            description_eng: self.description_eng,
            percent_value: self.percent_value,
            is_active: self.is_active,
            available_from: self.available_from,
            available_to: self.available_to,
            category_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCategoryDiscount> for NewDiscount<'a> {
    fn from(value: &'a DomainNewCategoryDiscount) -> Self {
        Self {
            name: value.name.as_str(),
            name_eng: value.name_eng.as_str(),
            description: value.description.as_deref(),
            description_eng: value.description_eng.as_deref(),
            percent_value: value.percent_value,
            is_active: value.is_active,
            available_from: value.available_from,
            available_to: value.available_to,
        }
    }
}
