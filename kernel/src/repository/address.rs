use crate::model::{
    address::{event::CreateAddress, Address},
    id::AddressId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn create(&self, event: CreateAddress) -> AppResult<AddressId>;
    async fn find_by_id(&self, address_id: AddressId) -> AppResult<Option<Address>>;
}
