//! Core data models for the parking tariff engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod quote;
mod stay;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use quote::{ParkingQuote, TariffKind};
pub use stay::Stay;
