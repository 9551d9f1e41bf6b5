use derive_new::new;

#[derive(new)]
pub struct CreateAddress {
    pub campus_name: Option<String>,
    pub house_number: String,
    pub street_name: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}
