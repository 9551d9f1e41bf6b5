pub mod event;

/// Opaque bearer token handed out by the login endpoint and resolved back
/// to a user id per call. How tokens are minted and stored is a boundary
/// concern; the core only ever sees the resolved principal.
pub struct AccessToken(pub String);
