use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub verified: bool,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            roles,
            verified,
        } = value;
        let roles = roles
            .iter()
            .map(|r| {
                Role::from_str(r).map_err(|_| {
                    AppError::ConversionEntityError(format!("unknown role: {r}"))
                })
            })
            .collect::<Result<Vec<Role>, AppError>>()?;
        Ok(User {
            user_id,
            user_name,
            email,
            roles,
            verified,
        })
    }
}
