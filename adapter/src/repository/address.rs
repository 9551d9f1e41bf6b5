use crate::database::{model::address::AddressRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    address::{event::CreateAddress, Address},
    id::AddressId,
};
use kernel::repository::address::AddressRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AddressRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AddressRepository for AddressRepositoryImpl {
    async fn create(&self, event: CreateAddress) -> AppResult<AddressId> {
        let address_id = AddressId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO addresses
                (address_id, campus_name, house_number, street_name,
                 city, postal_code, country)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(address_id)
        .bind(&event.campus_name)
        .bind(&event.house_number)
        .bind(&event.street_name)
        .bind(&event.city)
        .bind(&event.postal_code)
        .bind(&event.country)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no address record has been created".into(),
            ));
        }
        Ok(address_id)
    }

    async fn find_by_id(&self, address_id: AddressId) -> AppResult<Option<Address>> {
        let row: Option<AddressRow> = sqlx::query_as(
            r#"
                SELECT address_id, campus_name, house_number, street_name,
                       city, postal_code, country
                FROM addresses
                WHERE address_id = $1
            "#,
        )
        .bind(address_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Address::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn an_address_round_trips(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AddressRepositoryImpl::new(ConnectionPool::new(pool));

        let address_id = repo
            .create(CreateAddress::new(
                Some("Main Campus".into()),
                "41".into(),
                "Prittwitzstrasse".into(),
                "Ulm".into(),
                "89075".into(),
                "Germany".into(),
            ))
            .await?;

        let found = repo.find_by_id(address_id).await?.unwrap();
        assert_eq!(found.campus_name.as_deref(), Some("Main Campus"));
        assert_eq!(found.city, "Ulm");
        assert!(repo.find_by_id(AddressId::new()).await?.is_none());
        Ok(())
    }
}
