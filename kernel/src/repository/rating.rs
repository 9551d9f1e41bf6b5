use crate::model::{
    id::{CourseId, UserId},
    rating::{
        event::{RateCourse, RateTutor},
        CourseRating, TutorRating,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Upsert keyed on (student, course): a second submission updates the
    /// existing row instead of creating another one.
    async fn rate_course(&self, event: RateCourse) -> AppResult<()>;
    /// Upsert keyed on (student, tutor); requires the student to be
    /// enrolled in at least one course taught by the tutor.
    async fn rate_tutor(&self, event: RateTutor) -> AppResult<()>;
    async fn find_course_ratings(
        &self,
        course_id: CourseId,
    ) -> AppResult<Vec<CourseRating>>;
    async fn find_tutor_ratings(&self, tutor_id: UserId) -> AppResult<Vec<TutorRating>>;
}
