use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    register_user, show_current_user, show_current_user_courses,
    show_current_user_meetings, show_user, show_user_meetings, verify_tutor,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", post(register_user))
        .route("/me", get(show_current_user))
        .route("/me/courses", get(show_current_user_courses))
        .route("/me/meetings", get(show_current_user_meetings))
        .route("/:user_id", get(show_user))
        .route("/:user_id/meetings", get(show_user_meetings))
        .route("/:user_id/verification", put(verify_tutor));

    Router::new().nest("/users", user_routers)
}
