use kernel::model::{address::Address, id::AddressId};

#[derive(sqlx::FromRow)]
pub struct AddressRow {
    pub address_id: AddressId,
    pub campus_name: Option<String>,
    pub house_number: String,
    pub street_name: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<AddressRow> for Address {
    fn from(value: AddressRow) -> Self {
        let AddressRow {
            address_id,
            campus_name,
            house_number,
            street_name,
            city,
            postal_code,
            country,
        } = value;
        Address {
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
