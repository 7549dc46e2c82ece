//! Difficulty retargeting.
//!
//! Decides the compact target the next block must satisfy. Off the
//! adjustment boundary the tip's target is reused, subject to the
//! test-network min-difficulty exception; on the boundary the target is
//! rescaled by the observed timespan of the closing interval. The order of
//! operations here is consensus-critical: clamp the timespan first, then
//! multiply before dividing.

use crate::compact::{compact_to_target, target_to_compact};
use consensus_core::{ChainHeader, ConsensusError, Params};
use primitive_types::{U256, U512};

/// Computes the compact target required of the block following `tip`.
///
/// `candidate_time` is the block time claimed by the incoming block; it
/// participates only in the min-difficulty rule. An error means the chain
/// view is missing an ancestor the retarget path guarantees, which is a
/// chain-integrity bug in the caller, never a property of the candidate.
pub fn next_work_required<H: ChainHeader>(
    tip: &H,
    candidate_time: i64,
    params: &Params,
) -> Result<u32, ConsensusError> {
    let pow_limit_bits = target_to_compact(params.pow_limit);
    let interval = params.difficulty_adjustment_interval();

    // Only change once per difficulty adjustment interval.
    if (tip.height() + 1) % interval != 0 {
        if params.allow_min_difficulty_blocks {
            // A candidate more than two spacings late may be mined at
            // minimum difficulty to unstick a sparse test network.
            if candidate_time > tip.timestamp() + params.pow_target_spacing * 2 {
                return Ok(pow_limit_bits);
            }
            // Otherwise reuse the last difficulty that was not itself a
            // min-difficulty exception.
            let mut cursor = tip.clone();
            while cursor.height() % interval != 0 && cursor.bits() == pow_limit_bits {
                match cursor.ancestor(cursor.height() - 1) {
                    Some(prev) => cursor = prev,
                    None => break,
                }
            }
            return Ok(cursor.bits());
        }
        return Ok(tip.bits());
    }

    // Interval boundary: rescale over the closing interval, measured from
    // its first block.
    let first_height = tip.height() + 1 - interval;
    let first = tip
        .ancestor(first_height)
        .ok_or(ConsensusError::MissingAncestor(first_height))?;

    let next = calculate_next_work_required(tip.bits(), tip.timestamp(), first.timestamp(), params);
    log::debug!(
        "retarget at height {}: {:#010x} -> {:#010x}",
        tip.height() + 1,
        tip.bits(),
        next
    );
    Ok(next)
}

/// Rescales the previous target by the observed interval timespan.
///
/// The timespan clamp bounds a single adjustment to 4x in either
/// direction. The multiply runs in 512 bits so no high bits are truncated
/// before the divide, and the quotient is clamped against the network
/// ceiling before narrowing back to 256 bits.
pub fn calculate_next_work_required(
    last_bits: u32,
    last_time: i64,
    first_time: i64,
    params: &Params,
) -> u32 {
    if params.no_retargeting {
        return last_bits;
    }

    // Limit the adjustment step. The subtraction is signed; inconsistent
    // clocks clamp rather than error.
    let mut actual_timespan = last_time - first_time;
    if actual_timespan < params.pow_target_timespan / 4 {
        actual_timespan = params.pow_target_timespan / 4;
    }
    if actual_timespan > params.pow_target_timespan * 4 {
        actual_timespan = params.pow_target_timespan * 4;
    }

    // Retarget: previous * actual / expected, multiply before divide.
    let (prev_target, _, _) = compact_to_target(last_bits);
    let adjusted = prev_target.full_mul(U256::from(actual_timespan as u64))
        / U512::from(params.pow_target_timespan as u64);

    let new_target = match U256::try_from(adjusted) {
        Ok(target) if target <= params.pow_limit => target,
        // Above the ceiling, whether or not it still fits 256 bits.
        _ => params.pow_limit,
    };

    target_to_compact(new_target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use consensus_core::NetworkType;

    fn mainnet() -> Params {
        Params::for_network(NetworkType::Mainnet)
    }

    #[test]
    fn test_exact_timespan_leaves_target_unchanged() {
        let params = mainnet();
        let first_time = 1_600_000_000;
        let last_time = first_time + params.pow_target_timespan;
        assert_eq!(
            calculate_next_work_required(0x1d00_ffff, last_time, first_time, &params),
            0x1d00_ffff
        );
    }

    #[test]
    fn test_no_retargeting_fixes_difficulty() {
        let params = Params::for_network(NetworkType::Simnet);
        assert_eq!(calculate_next_work_required(0x207f_ffff, 9_999_999, 0, &params), 0x207f_ffff);
    }

    #[test]
    fn test_clamp_lower_boundary() {
        let params = mainnet();
        let first_time = 1_600_000_000;
        let quarter = params.pow_target_timespan / 4;

        let at_bound = calculate_next_work_required(0x1c05_a3f4, first_time + quarter, first_time, &params);
        // Anything faster clamps to the same result, including a
        // clock-skewed negative timespan.
        for observed in [quarter - 1, 1, 0, -600] {
            assert_eq!(
                calculate_next_work_required(0x1c05_a3f4, first_time + observed, first_time, &params),
                at_bound
            );
        }
    }

    #[test]
    fn test_clamp_upper_boundary() {
        let params = mainnet();
        let first_time = 1_600_000_000;
        let quadruple = params.pow_target_timespan * 4;

        let at_bound = calculate_next_work_required(0x1c05_a3f4, first_time + quadruple, first_time, &params);
        for observed in [quadruple + 1, quadruple * 10] {
            assert_eq!(
                calculate_next_work_required(0x1c05_a3f4, first_time + observed, first_time, &params),
                at_bound
            );
        }
    }

    #[test]
    fn test_timespan_monotonicity() {
        let params = mainnet();
        let first_time = 1_600_000_000;
        let step = params.pow_target_timespan / 2;

        let mut previous = U256::zero();
        for multiple in 1i64..=8 {
            let bits =
                calculate_next_work_required(0x1c05_a3f4, first_time + step * multiple, first_time, &params);
            let (target, _, _) = compact_to_target(bits);
            assert!(target >= previous, "longer timespan must not harden the target");
            previous = target;
        }
    }

    #[test]
    fn test_ceiling_clamps_to_pow_limit() {
        let params = mainnet();
        let first_time = 1_600_000_000;
        // Already at the ceiling and slowing down 4x: stays at the ceiling.
        let bits = calculate_next_work_required(
            0x1d00_ffff,
            first_time + params.pow_target_timespan * 4,
            first_time,
            &params,
        );
        assert_eq!(bits, target_to_compact(params.pow_limit));
    }

    // Historical Bitcoin mainnet transitions, which these parameters mirror.

    #[test]
    fn test_first_mainnet_retarget() {
        let params = mainnet();
        assert_eq!(
            calculate_next_work_required(0x1d00_ffff, 1_262_152_739, 1_261_130_161, &params),
            0x1d00_d86a
        );
    }

    #[test]
    fn test_early_mainnet_retarget_holds_ceiling() {
        let params = mainnet();
        assert_eq!(
            calculate_next_work_required(0x1d00_ffff, 1_233_061_996, 1_231_006_505, &params),
            0x1d00_ffff
        );
    }

    #[test]
    fn test_mainnet_retarget_at_lower_clamp() {
        let params = mainnet();
        assert_eq!(
            calculate_next_work_required(0x1c05_a3f4, 1_279_297_671, 1_279_008_237, &params),
            0x1c01_68fd
        );
    }

    #[test]
    fn test_mainnet_retarget_at_upper_clamp() {
        let params = mainnet();
        assert_eq!(
            calculate_next_work_required(0x1c38_7f6f, 1_269_211_443, 1_263_163_443, &params),
            0x1d00_e1fd
        );
    }
}
