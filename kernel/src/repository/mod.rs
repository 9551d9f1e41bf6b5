pub mod address;
pub mod auth;
pub mod course;
pub mod enrollment;
pub mod health;
pub mod meeting;
pub mod rating;
pub mod user;
