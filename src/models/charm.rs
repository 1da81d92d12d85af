use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::charm::{Charm as DomainCharm, NewCharm as DomainNewCharm};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::charms)]
pub struct Charm {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub name_eng: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::charms)]
pub struct NewCharm<'a> {
    pub category_id: i32,
    pub name: &'a str,
    pub name_eng: &'a str,
    pub price_cents: i64,
    pub image_url: Option<&'a str>,
}

impl From<Charm> for DomainCharm {
    fn from(value: Charm) -> Self {
        Self {
            id: value.id,
            category_id: value.category_id,
            name: value.name,
            name_eng: value.name_eng,
            price_cents: value.price_cents,
            image_url: value.image_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCharm> for NewCharm<'a> {
    fn from(value: &'a DomainNewCharm) -> Self {
        Self {
            category_id: value.category_id,
            name: value.name.as_str(),
            name_eng: value.name_eng.as_str(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_deref(),
        }
    }
}
