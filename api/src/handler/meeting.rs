use crate::{
    extractor::AuthorizedUser,
    model::{
        meeting::{
            CreateMeetingRequest, CreateMeetingRequestWithUserId, MeetingResponse,
            MeetingsResponse, UpdateMeetingRequest, UpdateMeetingRequestWithIds,
        },
        user::{UserResponse, UsersResponse},
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{CourseId, MeetingId},
    meeting::event::{BookMeeting, CancelMeeting, DeleteMeeting},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_meeting(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateMeetingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let event = CreateMeetingRequestWithUserId::new(user.id(), req);
    registry
        .meeting_repository()
        .create(event.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_meeting(
    _user: AuthorizedUser,
    Path(meeting_id): Path<MeetingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MeetingResponse>> {
    registry
        .meeting_repository()
        .find_by_id(meeting_id)
        .await
        .and_then(|meeting| match meeting {
            Some(meeting) => Ok(Json(meeting.into())),
            None => Err(AppError::EntityNotFound(format!(
                "meeting not found with id {meeting_id}"
            ))),
        })
}

pub async fn show_course_meetings(
    _user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MeetingsResponse>> {
    registry
        .meeting_repository()
        .find_by_course_id(course_id)
        .await
        .map(|meetings| {
            Json(MeetingsResponse {
                items: meetings.into_iter().map(MeetingResponse::from).collect(),
            })
        })
}

pub async fn update_meeting(
    user: AuthorizedUser,
    Path(meeting_id): Path<MeetingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateMeetingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let event = UpdateMeetingRequestWithIds::new(meeting_id, user.id(), req);
    registry
        .meeting_repository()
        .update(event.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_meeting(
    user: AuthorizedUser,
    Path(meeting_id): Path<MeetingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let event = DeleteMeeting {
        meeting_id,
        requested_user: user.id(),
    };
    registry
        .meeting_repository()
        .delete(event)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn book_meeting(
    user: AuthorizedUser,
    Path(meeting_id): Path<MeetingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .meeting_repository()
        .book(BookMeeting::new(meeting_id, user.id()))
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn cancel_meeting(
    user: AuthorizedUser,
    Path(meeting_id): Path<MeetingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .meeting_repository()
        .cancel(CancelMeeting::new(meeting_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn show_meeting_participants(
    _user: AuthorizedUser,
    Path(meeting_id): Path<MeetingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .meeting_repository()
        .find_participants(meeting_id)
        .await
        .map(|participants| {
            Json(UsersResponse {
                items: participants.into_iter().map(UserResponse::from).collect(),
            })
        })
}
