pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod submission;
pub mod telemetry;
pub mod utils;
pub mod waitlist_client;
