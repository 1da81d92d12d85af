use crate::domain::charm::Charm;
use crate::forms::charms::AddCharmForm;
use crate::repository::{CategoryReader, CharmReader, CharmWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists the charms offered with one category.
///
/// Missing categories are a `NotFound` rather than an empty listing.
pub fn list_charms_by_category<R>(repo: &R, category_id: i32) -> ServiceResult<Vec<Charm>>
where
    R: CategoryReader + CharmReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.list_charms_by_category(category_id)
        .map_err(ServiceError::from)
}

/// Fetches a single charm.
pub fn get_charm<R>(repo: &R, charm_id: i32) -> ServiceResult<Charm>
where
    R: CharmReader + ?Sized,
{
    repo.get_charm_by_id(charm_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Adds a charm to a category.
pub fn create_charm<R>(repo: &R, category_id: i32, form: AddCharmForm) -> ServiceResult<Charm>
where
    R: CategoryReader + CharmWriter + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let new_charm = form
        .into_new_charm(category_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_charm(&new_charm).map_err(ServiceError::from)
}

/// Deletes a charm.
pub fn delete_charm<R>(repo: &R, charm_id: i32) -> ServiceResult<()>
where
    R: CharmWriter + ?Sized,
{
    repo.delete_charm(charm_id).map_err(ServiceError::from)
}
