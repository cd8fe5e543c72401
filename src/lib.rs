//! Upkeep: facility-maintenance issue tracking core.
//!
//! This crate provides the lifecycle engine and activity ledger for
//! facility-maintenance issues: validated status transitions, automatic
//! timestamp derivation, role-based permission checks, and an append-only
//! per-issue activity record.
//!
//! # Architecture
//!
//! Upkeep follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, etc.)
//!
//! Persistence mechanics, notification transport, presentation, and session
//! management live in collaborators behind the ports.

pub mod issue;
