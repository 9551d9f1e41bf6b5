use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub roles: Vec<Role>,
    /// Meaningful only for users holding [`Role::Tutor`]; a tutor must be
    /// verified before they may schedule meetings.
    pub verified: bool,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_verified_tutor(&self) -> bool {
        self.has_role(Role::Tutor) && self.verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor(verified: bool) -> User {
        User {
            user_id: UserId::new(),
            user_name: "Jo Tutor".into(),
            email: "jo@example.com".into(),
            roles: vec![Role::Student, Role::Tutor],
            verified,
        }
    }

    #[test]
    fn has_role_checks_set_membership() {
        let user = tutor(false);
        assert!(user.has_role(Role::Tutor));
        assert!(user.has_role(Role::Student));
        assert!(!user.has_role(Role::Verifier));
    }

    #[test]
    fn unverified_tutor_is_not_a_verified_tutor() {
        assert!(!tutor(false).is_verified_tutor());
        assert!(tutor(true).is_verified_tutor());
    }

    #[test]
    fn verified_flag_alone_does_not_make_a_tutor() {
        let mut user = tutor(true);
        user.roles = vec![Role::Student];
        assert!(!user.is_verified_tutor());
    }
}
