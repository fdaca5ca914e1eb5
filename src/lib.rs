//! Airport Admin - an administration backend for airport operations.
//!
//! # Overview
//!
//! A REST API over ten related entity types: flights, airlines, passengers,
//! gates, staff, weather readings, runways, baggage, maintenance jobs and
//! security alerts. State is held in memory and seeded with sample data at
//! startup; nothing survives a restart.
//!
//! Records refer to each other only by id. No referential integrity is
//! enforced and no update ever spans two collections.
//!
//! # Modules
//!
//! - [`model`]: Entity records, status enums and request shapes
//! - [`store`]: In-memory, lock-guarded collections
//! - [`seed`]: Sample data applied at startup
//! - [`dashboard`]: Aggregate counters for the dashboard
//! - [`response`]: Response envelope and API errors
//! - [`api`]: HTTP handlers and the router
//! - [`config`]: Environment configuration

pub mod api;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod response;
pub mod seed;
pub mod store;
