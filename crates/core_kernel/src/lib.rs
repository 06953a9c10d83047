//! Core Kernel - Foundational types shared by the fund registry crates
//!
//! This crate provides the building blocks used across the domain, storage
//! and HTTP layers:
//! - The numeric fund identifier
//! - The port error type and health-check contract implemented by adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::FundId;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
