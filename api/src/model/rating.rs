use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{CourseId, RatingId, UserId},
    rating::{CourseRating, TutorRating},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    #[garde(range(min = 1.0, max = 5.0))]
    pub points: f64,
    #[garde(skip)]
    #[serde(default)]
    pub review: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRatingResponse {
    pub rating_id: RatingId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub points: f64,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

impl From<CourseRating> for CourseRatingResponse {
    fn from(value: CourseRating) -> Self {
        let CourseRating {
            rating_id,
            student_id,
            course_id,
            points,
            review,
            created_at,
        } = value;
        Self {
            rating_id,
            student_id,
            course_id,
            points,
            review,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRatingsResponse {
    pub items: Vec<CourseRatingResponse>,
    pub average: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRatingResponse {
    pub rating_id: RatingId,
    pub student_id: UserId,
    pub tutor_id: UserId,
    pub points: f64,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

impl From<TutorRating> for TutorRatingResponse {
    fn from(value: TutorRating) -> Self {
        let TutorRating {
            rating_id,
            student_id,
            tutor_id,
            points,
            review,
            created_at,
        } = value;
        Self {
            rating_id,
            student_id,
            tutor_id,
            points,
            review,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRatingsResponse {
    pub items: Vec<TutorRatingResponse>,
    pub average: f64,
}
