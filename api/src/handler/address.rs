use crate::{
    extractor::AuthorizedUser,
    model::address::{AddressResponse, CreateAddressRequest},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::AddressId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_address(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAddressRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .address_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_address(
    _user: AuthorizedUser,
    Path(address_id): Path<AddressId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AddressResponse>> {
    registry
        .address_repository()
        .find_by_id(address_id)
        .await
        .and_then(|address| match address {
            Some(address) => Ok(Json(address.into())),
            None => Err(AppError::EntityNotFound(format!(
                "address not found with id {address_id}"
            ))),
        })
}
