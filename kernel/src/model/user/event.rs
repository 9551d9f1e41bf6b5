use crate::model::{id::UserId, role::Role};
use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<Role>,
}

/// A VERIFIER-role user marks a tutor as verified (or revokes it).
#[derive(Debug, new)]
pub struct UpdateTutorVerification {
    pub tutor_id: UserId,
    pub verified: bool,
    pub requested_user: UserId,
}
