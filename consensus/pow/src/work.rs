//! Per-block work metric.
//!
//! Chain selection weighs competing tips by cumulative work, where a block
//! claiming target `t` contributes `floor(2^256 / (t + 1))`. The policy
//! that consumes the sums lives with the chain manager; only the per-block
//! quantity is computed here.

use crate::compact::compact_to_target;
use consensus_core::ConsensusError;
use primitive_types::U256;

/// Work contributed by a block whose header claims compact `bits`.
///
/// Rejects encodings that are negative, overflowed, or zero; a header that
/// fails here fails proof-of-work verification as well.
pub fn block_work(bits: u32) -> Result<U256, ConsensusError> {
    let (target, negative, overflow) = compact_to_target(bits);
    if negative || overflow || target.is_zero() {
        return Err(ConsensusError::InvalidDifficultyTarget);
    }

    // 2^256 / (t + 1) == ~t / (t + 1) + 1 for non-zero t, which keeps the
    // division inside 256 bits.
    Ok(!target / (target + U256::one()) + U256::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_of_easiest_mainnet_target() {
        // The ceiling target contributes 2^32 + 2^16 + 1.
        assert_eq!(block_work(0x1d00_ffff).unwrap(), U256::from(0x1_0001_0001u64));
    }

    #[test]
    fn test_harder_target_means_more_work() {
        let easy = block_work(0x207f_ffff).unwrap();
        let harder = block_work(0x1d00_ffff).unwrap();
        let hardest = block_work(0x1c05_a3f4).unwrap();
        assert!(easy < harder);
        assert!(harder < hardest);
    }

    #[test]
    fn test_invalid_encodings_carry_no_work() {
        // Zero, negative, and overflowed encodings respectively.
        for bits in [0x0000_0000, 0x0180_3456, 0xff12_3456] {
            assert!(matches!(
                block_work(bits),
                Err(ConsensusError::InvalidDifficultyTarget)
            ));
        }
    }
}
