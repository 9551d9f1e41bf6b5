pub mod address;
pub mod auth;
pub mod course;
pub mod enrollment;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod health;
pub mod meeting;
pub mod rating;
pub mod user;
