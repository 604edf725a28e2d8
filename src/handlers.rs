// src/handlers.rs

pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod incomes;
pub mod projects;
pub mod purchasing;
pub mod reports;
