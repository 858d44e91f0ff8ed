//! Business logic services.

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod stores;
pub mod users;
