use diesel::prelude::*;

use crate::{
    domain::charm::{Charm as DomainCharm, NewCharm as DomainNewCharm},
    models::charm::{Charm as DbCharm, NewCharm as DbNewCharm},
    repository::{CharmReader, CharmWriter, DieselRepository, RepositoryError, RepositoryResult},
};

impl CharmReader for DieselRepository {
    fn get_charm_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCharm>> {
        use crate::schema::charms;

        let mut conn = self.conn()?;
        let charm = charms::table
            .filter(charms::id.eq(id))
            .first::<DbCharm>(&mut conn)
            .optional()?;

        Ok(charm.map(Into::into))
    }

    fn list_charms_by_category(&self, category_id: i32) -> RepositoryResult<Vec<DomainCharm>> {
        use crate::schema::charms;

        let mut conn = self.conn()?;
        let db_charms = charms::table
            .filter(charms::category_id.eq(category_id))
            .order(charms::name.asc())
            .load::<DbCharm>(&mut conn)?;

        Ok(db_charms.into_iter().map(Into::into).collect())
    }
}

impl CharmWriter for DieselRepository {
    fn create_charm(&self, new_charm: &DomainNewCharm) -> RepositoryResult<DomainCharm> {
        use crate::schema::charms;

        let mut conn = self.conn()?;
        let db_new = DbNewCharm::from(new_charm);

        let created = diesel::insert_into(charms::table)
            .values(&db_new)
            .get_result::<DbCharm>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_charm(&self, charm_id: i32) -> RepositoryResult<()> {
        use crate::schema::charms;

        let mut conn = self.conn()?;

        let target = charms::table.filter(charms::id.eq(charm_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
