use kernel::model::id::UserId;

#[derive(sqlx::FromRow)]
pub struct CredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
