use crate::{
    extractor::AuthorizedUser,
    model::{
        course::{
            CourseListQuery, CourseResponse, CoursesResponse, CourseSummaryResponse,
            CreateCategoryRequest, CreateCourseRequest, CreateCourseRequestWithUserId,
        },
        user::{UserResponse, UsersResponse},
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{course::event::DeleteCourse, id::CourseId, rating::average};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_course(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCourseRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let event = CreateCourseRequestWithUserId::new(user.id(), req);
    registry
        .course_repository()
        .create(event.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_course(
    _user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CourseResponse>> {
    let course = registry
        .course_repository()
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("course not found with id {course_id}"))
        })?;

    let categories = registry
        .course_repository()
        .find_categories_by_course(course_id)
        .await?;
    let points: Vec<f64> = registry
        .rating_repository()
        .find_course_ratings(course_id)
        .await?
        .iter()
        .map(|r| r.points)
        .collect();

    Ok(Json(CourseResponse::new(course, categories, average(&points))))
}

pub async fn show_course_list(
    _user: AuthorizedUser,
    Query(query): Query<CourseListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CoursesResponse>> {
    registry
        .course_repository()
        .find_by_tutor_id(query.tutor_id)
        .await
        .map(|courses| {
            Json(CoursesResponse {
                items: courses
                    .into_iter()
                    .map(CourseSummaryResponse::from)
                    .collect(),
            })
        })
}

pub async fn delete_course(
    user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let event = DeleteCourse {
        course_id,
        requested_user: user.id(),
    };
    registry
        .course_repository()
        .delete(event)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn enroll_course(
    user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .enrollment_repository()
        .enroll(user.id(), course_id)
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn unenroll_course(
    user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .enrollment_repository()
        .unenroll(user.id(), course_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn show_course_students(
    _user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .enrollment_repository()
        .find_students_by_course(course_id)
        .await
        .map(|students| {
            Json(UsersResponse {
                items: students.into_iter().map(UserResponse::from).collect(),
            })
        })
}

pub async fn register_category(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCategoryRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .course_repository()
        .create_category(req.category_name)
        .await
        .map(|_| StatusCode::CREATED)
}
