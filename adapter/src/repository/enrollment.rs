use crate::database::{
    model::{course::CourseRow, user::UserRow},
    set_transaction_serializable, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    course::Course,
    id::{CourseId, UserId},
    role::Role,
    user::User,
};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn enroll(&self, student_id: UserId, course_id: CourseId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        // The lookup is role-scoped: a user without the STUDENT role reads
        // as "student not found".
        let student: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, roles, verified
                FROM users
                WHERE user_id = $1 AND $2 = ANY(roles)
            "#,
        )
        .bind(student_id)
        .bind(Role::Student.as_ref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if student.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "student not found with id {student_id}"
            )));
        }

        let course: Option<CourseRow> = sqlx::query_as(
            r#"
                SELECT course_id, course_name, tutor_id, description, created_at
                FROM courses
                WHERE course_id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let Some(course) = course else {
            return Err(AppError::EntityNotFound(format!(
                "course not found with id {course_id}"
            )));
        };

        if course.tutor_id == student_id {
            return Err(AppError::ForbiddenOperation(format!(
                "student {student_id} cannot enroll in their own course {course_id}"
            )));
        }

        // Single authoritative relation: the composite primary key makes a
        // concurrent duplicate insert fail instead of committing twice.
        let res = sqlx::query(
            r#"
                INSERT INTO enrollments (student_id, course_id)
                VALUES ($1, $2)
                ON CONFLICT (student_id, course_id) DO NOTHING
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "student {student_id} is already enrolled in course {course_id}"
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn unenroll(&self, student_id: UserId, course_id: CourseId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let student_exists: Option<(UserId,)> =
            sqlx::query_as("SELECT user_id FROM users WHERE user_id = $1")
                .bind(student_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if student_exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "student not found with id {student_id}"
            )));
        }

        let course_exists: Option<(CourseId,)> =
            sqlx::query_as("SELECT course_id FROM courses WHERE course_id = $1")
                .bind(course_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if course_exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "course not found with id {course_id}"
            )));
        }

        // Removing an absent relation is an error, not a no-op; blind
        // retries must observe it.
        let res = sqlx::query(
            r#"
                DELETE FROM enrollments
                WHERE student_id = $1 AND course_id = $2
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::InvalidState(format!(
                "student {student_id} is not enrolled in course {course_id}"
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn is_enrolled(
        &self,
        student_id: UserId,
        course_id: CourseId,
    ) -> AppResult<bool> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
                SELECT 1 FROM enrollments
                WHERE student_id = $1 AND course_id = $2
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.is_some())
    }

    async fn find_courses_by_student(
        &self,
        student_id: UserId,
    ) -> AppResult<Vec<Course>> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
                SELECT c.course_id, c.course_name, c.tutor_id, c.description,
                       c.created_at
                FROM enrollments AS e
                INNER JOIN courses AS c ON e.course_id = c.course_id
                WHERE e.student_id = $1
                ORDER BY e.created_at ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_students_by_course(
        &self,
        course_id: CourseId,
    ) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT u.user_id, u.user_name, u.email, u.roles, u.verified
                FROM enrollments AS e
                INNER JOIN users AS u ON e.student_id = u.user_id
                WHERE e.course_id = $1
                ORDER BY e.created_at ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{fixtures, user::UserRepositoryImpl};
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    #[sqlx::test(migrations = "../migrations")]
    async fn enroll_adds_the_pair_to_both_projections(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        assert!(!repo.is_enrolled(student_id, course_id).await?);
        repo.enroll(student_id, course_id).await?;

        assert!(repo.is_enrolled(student_id, course_id).await?);
        let courses = repo.find_courses_by_student(student_id).await?;
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_id, course_id);
        let students = repo.find_students_by_course(course_id).await?;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].user_id, student_id);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_enrollment_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        repo.enroll(student_id, course_id).await?;
        let err = repo.enroll(student_id, course_id).await.unwrap_err();
        assert!(matches!(err, AppError::ResourceConflict(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn unenroll_clears_both_sides_and_twice_is_invalid_state(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        repo.enroll(student_id, course_id).await?;
        repo.unenroll(student_id, course_id).await?;

        assert!(!repo.is_enrolled(student_id, course_id).await?);
        assert!(repo.find_courses_by_student(student_id).await?.is_empty());
        assert!(repo.find_students_by_course(course_id).await?.is_empty());

        let err = repo.unenroll(student_id, course_id).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_tutor_cannot_enroll_in_their_own_course(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        // Holds both roles, so the role-scoped lookup succeeds.
        let tutor_id = user_repo
            .create(CreateUser::new(
                "Student Tutor".into(),
                "st@example.com".into(),
                "password".into(),
                vec![Role::Student, Role::Tutor],
            ))
            .await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        let err = repo.enroll(tutor_id, course_id).await.unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn enroll_requires_existing_student_and_course(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        let err = repo.enroll(UserId::new(), course_id).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
        let err = repo.enroll(student_id, CourseId::new()).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
        Ok(())
    }
}
