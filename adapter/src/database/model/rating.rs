use chrono::{DateTime, Utc};
use kernel::model::{
    id::{CourseId, RatingId, UserId},
    rating::{CourseRating, TutorRating},
};

#[derive(sqlx::FromRow)]
pub struct CourseRatingRow {
    pub rating_id: RatingId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub points: f64,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

impl From<CourseRatingRow> for CourseRating {
    fn from(value: CourseRatingRow) -> Self {
        let CourseRatingRow {
            rating_id,
            student_id,
            course_id,
            points,
            review,
            created_at,
        } = value;
        CourseRating {
            rating_id,
            student_id,
            course_id,
            points,
            review,
            created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct TutorRatingRow {
    pub rating_id: RatingId,
    pub student_id: UserId,
    pub tutor_id: UserId,
    pub points: f64,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

impl From<TutorRatingRow> for TutorRating {
    fn from(value: TutorRatingRow) -> Self {
        let TutorRatingRow {
            rating_id,
            student_id,
            tutor_id,
            points,
            review,
            created_at,
        } = value;
        TutorRating {
            rating_id,
            student_id,
            tutor_id,
            points,
            review,
            created_at,
        }
    }
}
