use super::{
    address::build_address_routers, auth::build_auth_routers,
    course::build_course_routers, health::build_health_check_routers,
    meeting::build_meeting_routers, rating::build_tutor_rating_routers,
    user::build_user_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_course_routers())
        .merge(build_meeting_routers())
        .merge(build_tutor_rating_routers())
        .merge(build_address_routers());

    Router::new().nest("/api/v1", router)
}
