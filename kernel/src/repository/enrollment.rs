use crate::model::{
    course::Course,
    id::{CourseId, UserId},
    user::User,
};
use async_trait::async_trait;
use shared::error::AppResult;

/// The student↔course relation. One authoritative table owns the relation;
/// both "sides" visible to callers are read-only projections of it, so the
/// two can never disagree.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn enroll(&self, student_id: UserId, course_id: CourseId) -> AppResult<()>;
    async fn unenroll(&self, student_id: UserId, course_id: CourseId) -> AppResult<()>;
    async fn is_enrolled(
        &self,
        student_id: UserId,
        course_id: CourseId,
    ) -> AppResult<bool>;
    async fn find_courses_by_student(&self, student_id: UserId)
        -> AppResult<Vec<Course>>;
    async fn find_students_by_course(&self, course_id: CourseId)
        -> AppResult<Vec<User>>;
}
