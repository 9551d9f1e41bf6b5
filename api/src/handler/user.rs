use crate::{
    extractor::AuthorizedUser,
    model::{
        course::{CourseSummaryResponse, CoursesResponse},
        meeting::{MeetingResponse, MeetingsResponse},
        user::{
            CreateUserRequest, UpdateTutorVerificationRequest,
            UpdateTutorVerificationRequestWithIds, UserResponse,
        },
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}

pub async fn show_user(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(format!(
                "user not found with id {user_id}"
            ))),
        })
}

pub async fn verify_tutor(
    user: AuthorizedUser,
    Path(tutor_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTutorVerificationRequest>,
) -> AppResult<StatusCode> {
    let event = UpdateTutorVerificationRequestWithIds::new(tutor_id, user.id(), req);
    registry
        .user_repository()
        .update_tutor_verification(event.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_current_user_courses(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CoursesResponse>> {
    registry
        .enrollment_repository()
        .find_courses_by_student(user.id())
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

pub async fn show_current_user_meetings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MeetingsResponse>> {
    registry
        .meeting_repository()
        .find_for_user(user.id())
        .await
        .map(|meetings| {
            Json(MeetingsResponse {
                items: meetings.into_iter().map(MeetingResponse::from).collect(),
            })
        })
}

pub async fn show_user_meetings(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MeetingsResponse>> {
    registry
        .meeting_repository()
        .find_for_user(user_id)
        .await
        .map(|meetings| {
            Json(MeetingsResponse {
                items: meetings.into_iter().map(MeetingResponse::from).collect(),
            })
        })
}
