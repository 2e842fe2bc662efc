//! Parking Tariff Engine
//!
//! This crate computes parking fees for a stay under two billing regimes:
//! a long stay tariff billed per calendar day, and a short stay tariff billed
//! per hour inside a daily weekday billing window.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
