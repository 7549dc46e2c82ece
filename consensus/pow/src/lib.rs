//! Proof-of-work difficulty rules.
//!
//! This crate decides the compact target each block must satisfy and
//! verifies that a header hash meets its claimed target:
//! - compact target codec (`compact`)
//! - retarget decision and calculator (`difficulty`)
//! - per-block work metric (`work`)
//!
//! Everything here is a pure function over a read-only chain view. The
//! results are consensus-critical: any divergence in rounding, overflow,
//! or clamping order forks the chain.

pub mod compact;
pub mod difficulty;
pub mod work;

use consensus_core::{Hash, Params};

pub use compact::{compact_to_target, target_to_compact};
pub use difficulty::{calculate_next_work_required, next_work_required};
pub use work::block_work;

/// Verifies that `hash` satisfies the compact target `bits`.
///
/// A malformed target (negative, overflowed, zero, or above the network
/// ceiling) rejects the block the same way an insufficient hash does;
/// nothing here is an error condition.
pub fn check_proof_of_work(hash: Hash, bits: u32, params: &Params) -> bool {
    let (target, negative, overflow) = compact_to_target(bits);

    // Range check on the claimed target itself.
    if negative || target.is_zero() || overflow || target > params.pow_limit {
        return false;
    }

    // The hash, read as a 256-bit integer, must not exceed the target.
    hash.as_u256() <= target
}
