use crate::model::id::{CategoryId, CourseId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    pub tutor_id: UserId,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
}
