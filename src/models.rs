// src/models.rs

pub mod badge;
pub mod dashboard;
pub mod expense;
pub mod income;
pub mod project;
pub mod purchasing;
pub mod user;
