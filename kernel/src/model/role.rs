use strum::{AsRefStr, EnumString};

/// Roles a user may hold. A user carries a set of these; authorization
/// checks are an explicit membership test, never a string comparison at
/// the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Tutor,
    Admin,
    /// May flip the `verified` flag on a tutor.
    Verifier,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn roles_round_trip_through_their_storage_form() {
        assert_eq!(Role::Student.as_ref(), "STUDENT");
        assert_eq!(Role::Verifier.as_ref(), "VERIFIER");
        assert_eq!(Role::from_str("TUTOR").unwrap(), Role::Tutor);
        assert!(Role::from_str("tutor").is_err());
    }
}
