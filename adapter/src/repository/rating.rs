use crate::database::{
    model::rating::{CourseRatingRow, TutorRatingRow},
    set_transaction_serializable, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{CourseId, RatingId, UserId},
    rating::{
        event::{RateCourse, RateTutor},
        CourseRating, TutorRating,
    },
    role::Role,
};
use kernel::repository::rating::RatingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RatingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn rate_course(&self, event: RateCourse) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        self.assert_user_with_role(&mut tx, event.student_id, Role::Student, "student")
            .await?;

        let course: Option<(CourseId,)> =
            sqlx::query_as("SELECT course_id FROM courses WHERE course_id = $1")
                .bind(event.course_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if course.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "course not found with id {}",
                event.course_id
            )));
        }

        let enrolled: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM enrollments WHERE student_id = $1 AND course_id = $2",
        )
        .bind(event.student_id)
        .bind(event.course_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if enrolled.is_none() {
            return Err(AppError::ForbiddenOperation(format!(
                "student {} is not enrolled in course {}",
                event.student_id, event.course_id
            )));
        }

        sqlx::query(
            r#"
                INSERT INTO course_ratings
                (rating_id, student_id, course_id, points, review)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (student_id, course_id)
                DO UPDATE SET points = EXCLUDED.points,
                              review = EXCLUDED.review,
                              created_at = CURRENT_TIMESTAMP(3)
            "#,
        )
        .bind(RatingId::new())
        .bind(event.student_id)
        .bind(event.course_id)
        .bind(event.points)
        .bind(&event.review)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn rate_tutor(&self, event: RateTutor) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        self.assert_user_with_role(&mut tx, event.student_id, Role::Student, "student")
            .await?;
        self.assert_user_with_role(&mut tx, event.tutor_id, Role::Tutor, "tutor")
            .await?;

        // The student qualifies when enrolled in at least one course the
        // tutor teaches.
        let taught: Option<(i32,)> = sqlx::query_as(
            r#"
                SELECT 1
                FROM enrollments AS e
                INNER JOIN courses AS c ON e.course_id = c.course_id
                WHERE e.student_id = $1 AND c.tutor_id = $2
                LIMIT 1
            "#,
        )
        .bind(event.student_id)
        .bind(event.tutor_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if taught.is_none() {
            return Err(AppError::ForbiddenOperation(format!(
                "student {} is not enrolled in any course taught by tutor {}",
                event.student_id, event.tutor_id
            )));
        }

        sqlx::query(
            r#"
                INSERT INTO tutor_ratings
                (rating_id, student_id, tutor_id, points, review)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (student_id, tutor_id)
                DO UPDATE SET points = EXCLUDED.points,
                              review = EXCLUDED.review,
                              created_at = CURRENT_TIMESTAMP(3)
            "#,
        )
        .bind(RatingId::new())
        .bind(event.student_id)
        .bind(event.tutor_id)
        .bind(event.points)
        .bind(&event.review)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn find_course_ratings(
        &self,
        course_id: CourseId,
    ) -> AppResult<Vec<CourseRating>> {
        let rows: Vec<CourseRatingRow> = sqlx::query_as(
            r#"
                SELECT rating_id, student_id, course_id, points, review, created_at
                FROM course_ratings
                WHERE course_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(CourseRating::from).collect())
    }

    async fn find_tutor_ratings(&self, tutor_id: UserId) -> AppResult<Vec<TutorRating>> {
        let rows: Vec<TutorRatingRow> = sqlx::query_as(
            r#"
                SELECT rating_id, student_id, tutor_id, points, review, created_at
                FROM tutor_ratings
                WHERE tutor_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(tutor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(TutorRating::from).collect())
    }
}

impl RatingRepositoryImpl {
    async fn assert_user_with_role(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
        role: Role,
        label: &str,
    ) -> AppResult<()> {
        let row: Option<(UserId,)> = sqlx::query_as(
            "SELECT user_id FROM users WHERE user_id = $1 AND $2 = ANY(roles)",
        )
        .bind(user_id)
        .bind(role.as_ref())
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if row.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "{label} not found with id {user_id}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{enrollment::EnrollmentRepositoryImpl, fixtures};
    use kernel::model::rating::average;
    use kernel::repository::enrollment::EnrollmentRepository;

    #[sqlx::test(migrations = "../migrations")]
    async fn rating_a_course_requires_enrollment(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RatingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        let err = repo
            .rate_course(RateCourse::new(student_id, course_id, 4.0, "good".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_second_course_rating_updates_in_place(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RatingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;
        enrollments.enroll(student_id, course_id).await?;

        repo.rate_course(RateCourse::new(student_id, course_id, 4.0, "good".into()))
            .await?;
        // Age the stored row so the refreshed timestamp is observable.
        sqlx::query(
            "UPDATE course_ratings SET created_at = created_at - INTERVAL '1 hour'",
        )
        .execute(&pool)
        .await?;
        let first = repo.find_course_ratings(course_id).await?;
        let first_created_at = first[0].created_at;

        repo.rate_course(RateCourse::new(
            student_id,
            course_id,
            2.0,
            "changed my mind".into(),
        ))
        .await?;

        let ratings = repo.find_course_ratings(course_id).await?;
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].points, 2.0);
        assert_eq!(ratings[0].review, "changed my mind");
        // The update moves the timestamp, it never keeps the first one.
        assert!(ratings[0].created_at > first_created_at);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn the_course_average_follows_the_current_rows(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RatingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let alice = fixtures::student(&pool, "alice@example.com").await?;
        let bob = fixtures::student(&pool, "bob@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;
        enrollments.enroll(alice, course_id).await?;
        enrollments.enroll(bob, course_id).await?;

        repo.rate_course(RateCourse::new(alice, course_id, 4.0, "".into())).await?;
        repo.rate_course(RateCourse::new(bob, course_id, 5.0, "".into())).await?;

        let points: Vec<f64> = repo
            .find_course_ratings(course_id)
            .await?
            .iter()
            .map(|r| r.points)
            .collect();
        assert_eq!(average(&points), 4.5);

        // An update shifts the average, it never adds a row.
        repo.rate_course(RateCourse::new(bob, course_id, 2.0, "".into())).await?;
        let points: Vec<f64> = repo
            .find_course_ratings(course_id)
            .await?
            .iter()
            .map(|r| r.points)
            .collect();
        assert_eq!(average(&points), 3.0);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn rating_a_tutor_requires_a_shared_course(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RatingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        let err = repo
            .rate_tutor(RateTutor::new(student_id, tutor_id, 5.0, "great".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));

        enrollments.enroll(student_id, course_id).await?;
        repo.rate_tutor(RateTutor::new(student_id, tutor_id, 5.0, "great".into()))
            .await?;

        let ratings = repo.find_tutor_ratings(tutor_id).await?;
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].points, 5.0);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn rating_an_unknown_course_is_not_found(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RatingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student_id = fixtures::student(&pool, "s@example.com").await?;

        let err = repo
            .rate_course(RateCourse::new(
                student_id,
                CourseId::new(),
                4.0,
                "".into(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
        Ok(())
    }
}
