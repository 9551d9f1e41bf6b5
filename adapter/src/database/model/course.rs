use chrono::{DateTime, Utc};
use kernel::model::{
    course::{Category, Course},
    id::{CategoryId, CourseId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct CourseRow {
    pub course_id: CourseId,
    pub course_name: String,
    pub tutor_id: UserId,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(value: CourseRow) -> Self {
        let CourseRow {
            course_id,
            course_name,
            tutor_id,
            description,
            created_at,
        } = value;
        Course {
            course_id,
            course_name,
            tutor_id,
            description,
            created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct CategoryRow {
    pub category_id: CategoryId,
    pub category_name: String,
}

impl From<CategoryRow> for Category {
    fn from(value: CategoryRow) -> Self {
        Category {
            category_id: value.category_id,
            category_name: value.category_name,
        }
    }
}
