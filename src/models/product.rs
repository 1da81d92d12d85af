use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub name_eng: String,
    pub description: Option<String>,
    pub description_eng: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub name_eng: &'a str,
    pub description: Option<&'a str>,
    pub description_eng: Option<&'a str>,
    pub price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<&'a str>,
    pub thumb_url: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub name_eng: &'a str,
    pub description: Option<&'a str>,
    pub description_eng: Option<&'a str>,
    pub price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<&'a str>,
    pub thumb_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            name_eng: value.name_eng,
            description: value.description,
            description_eng: value.description_eng,
            price_cents: value.price_cents,
            is_available: value.is_available,
            image_url: value.image_url,
            thumb_url: value.thumb_url,
            category_id: value.category_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            name_eng: value.name_eng.as_str(),
            description: value.description.as_deref(),
            description_eng: value.description_eng.as_deref(),
            price_cents: value.price_cents,
            is_available: value.is_available,
            image_url: value.image_url.as_deref(),
            thumb_url: value.thumb_url.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            name_eng: value.name_eng.as_str(),
            description: value.description.as_deref(),
            description_eng: value.description_eng.as_deref(),
            price_cents: value.price_cents,
            is_available: value.is_available,
            image_url: value.image_url.as_deref(),
            thumb_url: value.thumb_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
