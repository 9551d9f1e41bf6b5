use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::address::{register_address, show_address};

pub fn build_address_routers() -> Router<AppRegistry> {
    let address_routers = Router::new()
        .route("/", post(register_address))
        .route("/:address_id", get(show_address));

    Router::new().nest("/addresses", address_routers)
}
