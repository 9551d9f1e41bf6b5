use garde::Validate;
use kernel::model::{
    address::{event::CreateAddress, Address},
    id::AddressId,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    #[garde(inner(length(min = 1)))]
    pub campus_name: Option<String>,
    #[garde(length(min = 1))]
    pub house_number: String,
    #[garde(length(min = 1))]
    pub street_name: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(length(min = 1))]
    pub postal_code: String,
    #[garde(length(min = 1))]
    pub country: String,
}

impl From<CreateAddressRequest> for CreateAddress {
    fn from(value: CreateAddressRequest) -> Self {
        let CreateAddressRequest {
            campus_name,
            house_number,
            street_name,
            city,
            postal_code,
            country,
        } = value;
        CreateAddress {
            campus_name,
            house_number,
            street_name,
            city,
            postal_code,
            country,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub address_id: AddressId,
    pub campus_name: Option<String>,
    pub house_number: String,
    pub street_name: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<Address> for AddressResponse {
    fn from(value: Address) -> Self {
        let Address {
            address_id,
            campus_name,
            house_number,
            street_name,
            city,
            postal_code,
            country,
        } = value;
        Self {
            address_id,
            campus_name,
            house_number,
            street_name,
            city,
            postal_code,
            country,
        }
    }
}
