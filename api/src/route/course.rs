use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    course::{
        delete_course, enroll_course, register_category, register_course,
        show_course, show_course_list, show_course_students, unenroll_course,
    },
    meeting::show_course_meetings,
    rating::{rate_course, show_course_ratings},
};

pub fn build_course_routers() -> Router<AppRegistry> {
    let course_routers = Router::new()
        .route("/", post(register_course))
        .route("/", get(show_course_list))
        .route("/:course_id", get(show_course))
        .route("/:course_id", delete(delete_course))
        .route("/:course_id/enrollments", post(enroll_course))
        .route("/:course_id/enrollments", delete(unenroll_course))
        .route("/:course_id/students", get(show_course_students))
        .route("/:course_id/meetings", get(show_course_meetings))
        .route("/:course_id/ratings", post(rate_course))
        .route("/:course_id/ratings", get(show_course_ratings));

    let category_routers = Router::new().route("/", post(register_category));

    Router::new()
        .nest("/courses", course_routers)
        .nest("/categories", category_routers)
}
