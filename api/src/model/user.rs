use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateTutorVerification},
        User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    Student,
    Tutor,
    Admin,
    Verifier,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Student => Self::Student,
            Role::Tutor => Self::Tutor,
            Role::Admin => Self::Admin,
            Role::Verifier => Self::Verifier,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Student => Self::Student,
            RoleName::Tutor => Self::Tutor,
            RoleName::Admin => Self::Admin,
            RoleName::Verifier => Self::Verifier,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(skip)]
    pub roles: Vec<RoleName>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            user_name,
            email,
            password,
            roles,
        } = value;
        CreateUser {
            user_name,
            email,
            password,
            roles: roles.into_iter().map(Role::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub roles: Vec<RoleName>,
    pub verified: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            roles,
            verified,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            roles: roles.into_iter().map(RoleName::from).collect(),
            verified,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorVerificationRequest {
    pub verified: bool,
}

#[derive(new)]
pub struct UpdateTutorVerificationRequestWithIds(
    UserId,
    UserId,
    UpdateTutorVerificationRequest,
);

impl From<UpdateTutorVerificationRequestWithIds> for UpdateTutorVerification {
    fn from(value: UpdateTutorVerificationRequestWithIds) -> Self {
        let UpdateTutorVerificationRequestWithIds(
            tutor_id,
            requested_user,
            UpdateTutorVerificationRequest { verified },
        ) = value;
        UpdateTutorVerification {
            tutor_id,
            verified,
            requested_user,
        }
    }
}
