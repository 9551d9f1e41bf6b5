use crate::model::id::{CategoryId, CourseId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateCourse {
    pub course_name: String,
    pub tutor_id: UserId,
    pub description: String,
    pub categories: Vec<CategoryId>,
}

#[derive(Debug, new)]
pub struct DeleteCourse {
    pub course_id: CourseId,
    pub requested_user: UserId,
}
