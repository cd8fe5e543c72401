//! Adapter implementations of the issue lifecycle ports.

pub mod memory;
pub mod noop;

pub use noop::NoopChangeListener;
