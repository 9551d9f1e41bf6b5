use crate::model::id::{CourseId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct RateCourse {
    pub student_id: UserId,
    pub course_id: CourseId,
    pub points: f64,
    pub review: String,
}

#[derive(Debug, new)]
pub struct RateTutor {
    pub student_id: UserId,
    pub tutor_id: UserId,
    pub points: f64,
    pub review: String,
}
