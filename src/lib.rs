// src/lib.rs

//! Matrícula Web offering harvester library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use services::Harvester;
