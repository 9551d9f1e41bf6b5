use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::meeting::{
    book_meeting, cancel_meeting, delete_meeting, register_meeting, show_meeting,
    show_meeting_participants, update_meeting,
};

pub fn build_meeting_routers() -> Router<AppRegistry> {
    let meeting_routers = Router::new()
        .route("/", post(register_meeting))
        .route("/:meeting_id", get(show_meeting))
        .route("/:meeting_id", put(update_meeting))
        .route("/:meeting_id", delete(delete_meeting))
        .route("/:meeting_id/participants", post(book_meeting))
        .route("/:meeting_id/participants", delete(cancel_meeting))
        .route("/:meeting_id/participants", get(show_meeting_participants));

    Router::new().nest("/meetings", meeting_routers)
}
