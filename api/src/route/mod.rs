pub mod address;
pub mod auth;
pub mod course;
pub mod health;
pub mod meeting;
pub mod rating;
pub mod user;
pub mod v1;
