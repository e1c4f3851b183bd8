//! Config Module
//!
//! Centralized configuration for terrain generation, flight and projection.

pub mod flight_config;

pub use flight_config::{FlightConfig, FlightParams, ViewParams};
