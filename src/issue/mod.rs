//! Facility-maintenance issue lifecycle and activity ledger.
//!
//! Issues move forward through `open → in_progress → closed` under
//! role-based permission checks, with every mutation mirrored by exactly one
//! batch of append-only activity entries. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the lifecycle engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
