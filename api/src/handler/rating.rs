use crate::{
    extractor::AuthorizedUser,
    model::rating::{
        CourseRatingResponse, CourseRatingsResponse, RateRequest, TutorRatingResponse,
        TutorRatingsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{CourseId, UserId},
    rating::{
        average,
        event::{RateCourse, RateTutor},
    },
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn rate_course(
    user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RateRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .rating_repository()
        .rate_course(RateCourse::new(user.id(), course_id, req.points, req.review))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_course_ratings(
    _user: AuthorizedUser,
    Path(course_id): Path<CourseId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CourseRatingsResponse>> {
    let ratings = registry
        .rating_repository()
        .find_course_ratings(course_id)
        .await?;
    let points: Vec<f64> = ratings.iter().map(|r| r.points).collect();

    Ok(Json(CourseRatingsResponse {
        items: ratings.into_iter().map(CourseRatingResponse::from).collect(),
        average: average(&points),
    }))
}

pub async fn rate_tutor(
    user: AuthorizedUser,
    Path(tutor_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RateRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .rating_repository()
        .rate_tutor(RateTutor::new(user.id(), tutor_id, req.points, req.review))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_tutor_ratings(
    _user: AuthorizedUser,
    Path(tutor_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TutorRatingsResponse>> {
    let ratings = registry
        .rating_repository()
        .find_tutor_ratings(tutor_id)
        .await?;
    let points: Vec<f64> = ratings.iter().map(|r| r.points).collect();

    Ok(Json(TutorRatingsResponse {
        items: ratings.into_iter().map(TutorRatingResponse::from).collect(),
        average: average(&points),
    }))
}
