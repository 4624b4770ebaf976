pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod persistence;
pub mod pricing;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
