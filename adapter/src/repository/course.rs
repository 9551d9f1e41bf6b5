use crate::database::{
    model::course::{CategoryRow, CourseRow},
    set_transaction_serializable, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    course::{
        event::{CreateCourse, DeleteCourse},
        Category, Course,
    },
    id::{CategoryId, CourseId, UserId},
    role::Role,
};
use kernel::repository::course::CourseRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CourseRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CourseRepository for CourseRepositoryImpl {
    async fn create(&self, event: CreateCourse) -> AppResult<CourseId> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let tutor: Option<(UserId,)> = sqlx::query_as(
            "SELECT user_id FROM users WHERE user_id = $1 AND $2 = ANY(roles)",
        )
        .bind(event.tutor_id)
        .bind(Role::Tutor.as_ref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if tutor.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "tutor not found with id {}",
                event.tutor_id
            )));
        }

        let course_id = CourseId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO courses (course_id, course_name, tutor_id, description)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (course_name) DO NOTHING
            "#,
        )
        .bind(course_id)
        .bind(&event.course_name)
        .bind(event.tutor_id)
        .bind(&event.description)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "a course named \"{}\" already exists",
                event.course_name
            )));
        }

        for category_id in &event.categories {
            let res = sqlx::query(
                r#"
                    INSERT INTO course_categories (course_id, category_id)
                    SELECT $1, category_id FROM categories WHERE category_id = $2
                "#,
            )
            .bind(course_id)
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
            if res.rows_affected() < 1 {
                return Err(AppError::EntityNotFound(format!(
                    "category not found with id {category_id}"
                )));
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(course_id)
    }

    async fn find_by_id(&self, course_id: CourseId) -> AppResult<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
                SELECT course_id, course_name, tutor_id, description, created_at
                FROM courses
                WHERE course_id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Course::from))
    }

    async fn find_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<Course>> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
                SELECT course_id, course_name, tutor_id, description, created_at
                FROM courses
                WHERE tutor_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(tutor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn delete(&self, event: DeleteCourse) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let course: Option<(UserId,)> =
            sqlx::query_as("SELECT tutor_id FROM courses WHERE course_id = $1")
                .bind(event.course_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        let Some((tutor_id,)) = course else {
            return Err(AppError::EntityNotFound(format!(
                "course not found with id {}",
                event.course_id
            )));
        };
        if tutor_id != event.requested_user {
            return Err(AppError::ForbiddenOperation(
                "only the owning tutor may delete a course".into(),
            ));
        }

        // Every edge referencing the course goes away with the course row,
        // never on its own: participant edges of its meetings, the meetings
        // themselves, ratings, enrollments and category links.
        sqlx::query(
            r#"
                DELETE FROM meeting_participants
                WHERE meeting_id IN
                    (SELECT meeting_id FROM meetings WHERE course_id = $1)
            "#,
        )
        .bind(event.course_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        sqlx::query("DELETE FROM meetings WHERE course_id = $1")
            .bind(event.course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        sqlx::query("DELETE FROM course_ratings WHERE course_id = $1")
            .bind(event.course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        sqlx::query("DELETE FROM enrollments WHERE course_id = $1")
            .bind(event.course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        sqlx::query("DELETE FROM course_categories WHERE course_id = $1")
            .bind(event.course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(event.course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no course record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn create_category(&self, category_name: String) -> AppResult<CategoryId> {
        let category_id = CategoryId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO categories (category_id, category_name)
                VALUES ($1, $2)
                ON CONFLICT (category_name) DO NOTHING
            "#,
        )
        .bind(category_id)
        .bind(&category_name)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "a category named \"{category_name}\" already exists"
            )));
        }
        Ok(category_id)
    }

    async fn find_categories_by_course(
        &self,
        course_id: CourseId,
    ) -> AppResult<Vec<Category>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
                SELECT c.category_id, c.category_name
                FROM course_categories AS cc
                INNER JOIN categories AS c ON cc.category_id = c.category_id
                WHERE cc.course_id = $1
                ORDER BY c.category_name ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{enrollment::EnrollmentRepositoryImpl, fixtures};
    use kernel::repository::enrollment::EnrollmentRepository;

    #[sqlx::test(migrations = "../migrations")]
    async fn only_a_tutor_may_own_a_course(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CourseRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student_id = fixtures::student(&pool, "s@example.com").await?;

        let err = repo
            .create(CreateCourse::new(
                "Analysis I".into(),
                student_id,
                "Limits and series".into(),
                vec![],
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn course_names_are_unique(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CourseRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;

        fixtures::course(&pool, tutor_id, "Analysis I").await?;
        let err = repo
            .create(CreateCourse::new(
                "Analysis I".into(),
                tutor_id,
                "A second attempt".into(),
                vec![],
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ResourceConflict(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn categories_attach_at_creation(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CourseRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let math = repo.create_category("Mathematics".into()).await?;
        let cs = repo.create_category("Computer Science".into()).await?;

        let course_id = repo
            .create(CreateCourse::new(
                "Analysis I".into(),
                tutor_id,
                "Limits and series".into(),
                vec![math, cs],
            ))
            .await?;

        let categories = repo.find_categories_by_course(course_id).await?;
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category_name, "Computer Science");
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn delete_requires_the_owning_tutor(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CourseRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = fixtures::tutor(&pool, "owner@example.com", true).await?;
        let other_id = fixtures::tutor(&pool, "other@example.com", true).await?;
        let course_id = fixtures::course(&pool, owner_id, "Analysis I").await?;

        let err = repo
            .delete(DeleteCourse::new(course_id, other_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn delete_detaches_enrollments_and_categories(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = CourseRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let math = repo.create_category("Mathematics".into()).await?;
        let course_id = repo
            .create(CreateCourse::new(
                "Analysis I".into(),
                tutor_id,
                "Limits and series".into(),
                vec![math],
            ))
            .await?;
        enrollments.enroll(student_id, course_id).await?;

        repo.delete(DeleteCourse::new(course_id, tutor_id)).await?;

        assert!(repo.find_by_id(course_id).await?.is_none());
        assert!(enrollments.find_courses_by_student(student_id).await?.is_empty());
        let links: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM course_categories WHERE course_id = $1")
                .bind(course_id)
                .fetch_optional(&pool)
                .await?;
        assert!(links.is_none());
        // The category itself survives.
        let category: Option<(CategoryId,)> =
            sqlx::query_as("SELECT category_id FROM categories WHERE category_id = $1")
                .bind(math)
                .fetch_optional(&pool)
                .await?;
        assert!(category.is_some());
        Ok(())
    }
}
