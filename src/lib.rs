pub mod analytics;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod extraction;
pub mod llm;
pub mod models;
