pub mod export;
pub mod gallery;
pub mod health;
pub mod stats;
