//! Core types for the Obol proof-of-work consensus engine.
//!
//! This crate holds the data model shared by the consensus subsystems:
//! - the 32-byte `Hash` wrapper and its arithmetic interpretation
//! - per-network consensus parameters and protocol constants
//! - the read-only header-chain abstraction consumed by retargeting
//! - consensus error types

pub mod config;
pub mod constants;
pub mod errors;
pub mod hash;
pub mod header;
pub mod network;

// Re-export key types for easier access
pub use config::Params;
pub use errors::ConsensusError;
pub use hash::{Hash, ZERO_HASH};
pub use header::{ChainHeader, ChainLink, HeaderChain, HeaderRecord};
pub use network::NetworkType;
