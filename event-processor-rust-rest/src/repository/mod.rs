pub mod health_repo;

pub use health_repo::{DatabaseHealthError, HealthRepository};
