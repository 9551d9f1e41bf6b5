use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateTutorVerification},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    /// Marks a tutor as verified. The requester must hold the VERIFIER
    /// role; the target must hold the TUTOR role.
    async fn update_tutor_verification(
        &self,
        event: UpdateTutorVerification,
    ) -> AppResult<()>;
}
