pub mod agenda;
pub mod browse;
pub mod config;
pub mod days;
pub mod sessions;
pub mod venues;
