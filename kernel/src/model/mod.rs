pub mod address;
pub mod auth;
pub mod course;
pub mod id;
pub mod meeting;
pub mod rating;
pub mod role;
pub mod user;
