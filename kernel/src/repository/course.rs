use crate::model::{
    course::{
        event::{CreateCourse, DeleteCourse},
        Category, Course,
    },
    id::{CategoryId, CourseId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, event: CreateCourse) -> AppResult<CourseId>;
    async fn find_by_id(&self, course_id: CourseId) -> AppResult<Option<Course>>;
    async fn find_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<Course>>;
    /// Detaches every relationship edge referencing the course (meeting
    /// participations, meetings, ratings, enrollments, category links)
    /// before removing the course row, all in one transaction.
    async fn delete(&self, event: DeleteCourse) -> AppResult<()>;
    async fn create_category(&self, category_name: String) -> AppResult<CategoryId>;
    async fn find_categories_by_course(
        &self,
        course_id: CourseId,
    ) -> AppResult<Vec<Category>>;
}
