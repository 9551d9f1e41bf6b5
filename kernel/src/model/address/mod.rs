use crate::model::id::AddressId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Address {
    pub address_id: AddressId,
    pub campus_name: Option<String>,
    pub house_number: String,
    pub street_name: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}
