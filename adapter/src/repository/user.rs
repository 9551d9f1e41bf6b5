use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateTutorVerification},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let hashed_password = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        let roles: Vec<String> = event
            .roles
            .iter()
            .map(|r| r.as_ref().to_string())
            .collect();

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, roles)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&hashed_password)
        .bind(&roles)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "user with email {} already exists",
                event.email
            )));
        }

        Ok(user_id)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, roles, verified
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update_tutor_verification(
        &self,
        event: UpdateTutorVerification,
    ) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let requester: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, roles, verified
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(event.requested_user)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let requester = requester
            .map(User::try_from)
            .transpose()?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "user not found with id {}",
                    event.requested_user
                ))
            })?;
        if !requester.has_role(Role::Verifier) {
            return Err(AppError::ForbiddenOperation(
                "only a verifier may change tutor verification".into(),
            ));
        }

        // The flag is only meaningful on a TUTOR-role user.
        let res = sqlx::query(
            r#"
                UPDATE users
                SET verified = $1
                WHERE user_id = $2 AND $3 = ANY(roles)
            "#,
        )
        .bind(event.verified)
        .bind(event.tutor_id)
        .bind(Role::Tutor.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "tutor not found with id {}",
                event.tutor_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }
}
