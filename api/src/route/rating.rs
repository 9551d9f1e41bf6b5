use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::rating::{rate_tutor, show_tutor_ratings};

pub fn build_tutor_rating_routers() -> Router<AppRegistry> {
    let tutor_routers = Router::new()
        .route("/:tutor_id/ratings", post(rate_tutor))
        .route("/:tutor_id/ratings", get(show_tutor_ratings));

    Router::new().nest("/tutors", tutor_routers)
}
