pub mod alerts;
pub mod auth;
pub mod contacts;
pub mod health;
pub mod location;
pub mod metrics;
pub mod sos;
pub mod swagger;
