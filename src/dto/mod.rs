pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod pricing;
pub mod products;
pub mod settings;
pub mod suppliers;
