//! Builders shared by the repository test suites.

use crate::database::ConnectionPool;
use crate::repository::{course::CourseRepositoryImpl, user::UserRepositoryImpl};
use kernel::model::{
    course::event::CreateCourse,
    id::{CourseId, UserId},
    role::Role,
    user::event::CreateUser,
};
use kernel::repository::{course::CourseRepository, user::UserRepository};
use shared::error::{AppError, AppResult};

pub(crate) async fn student(pool: &sqlx::PgPool, email: &str) -> AppResult<UserId> {
    let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
    repo.create(CreateUser::new(
        "Test Student".into(),
        email.into(),
        "password".into(),
        vec![Role::Student],
    ))
    .await
}

pub(crate) async fn tutor(
    pool: &sqlx::PgPool,
    email: &str,
    verified: bool,
) -> AppResult<UserId> {
    let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
    let tutor_id = repo
        .create(CreateUser::new(
            "Test Tutor".into(),
            email.into(),
            "password".into(),
            vec![Role::Tutor],
        ))
        .await?;
    if verified {
        sqlx::query("UPDATE users SET verified = TRUE WHERE user_id = $1")
            .bind(tutor_id)
            .execute(pool)
            .await
            .map_err(AppError::SpecificOperationError)?;
    }
    Ok(tutor_id)
}

pub(crate) async fn course(
    pool: &sqlx::PgPool,
    tutor_id: UserId,
    name: &str,
) -> AppResult<CourseId> {
    let repo = CourseRepositoryImpl::new(ConnectionPool::new(pool.clone()));
    repo.create(CreateCourse::new(
        name.into(),
        tutor_id,
        "A test course".into(),
        vec![],
    ))
    .await
}
