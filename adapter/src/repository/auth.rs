use crate::{
    database::{model::auth::CredentialRow, ConnectionPool},
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use std::{str::FromStr, sync::Arc};

/// Redis key for one issued token.
pub struct AuthorizationKey(String);

pub struct AuthorizedUserId(UserId);

pub fn from(event: CreateToken) -> (AuthorizationKey, AuthorizedUserId) {
    (
        AuthorizationKey(uuid::Uuid::new_v4().simple().to_string()),
        AuthorizedUserId(event.user_id),
    )
}

impl From<AuthorizationKey> for AccessToken {
    fn from(key: AuthorizationKey) -> Self {
        AccessToken(key.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(UserId::from_str(&value)?))
    }
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|value| value.map(|AuthorizedUserId(user_id)| user_id))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<CredentialRow> = sqlx::query_as(
            "SELECT user_id, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };

        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let (key, value) = from(event);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(key.into())
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = (&access_token).into();
        self.kv.delete(&key).await
    }
}
