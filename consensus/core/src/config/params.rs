use crate::constants::{POW_LIMIT, POW_LIMIT_RELAXED, POW_TARGET_SPACING, POW_TARGET_TIMESPAN};
use crate::network::NetworkType;
use primitive_types::U256;

/// Consensus parameters governing proof-of-work retargeting for one network.
///
/// Loaded once per network and treated as immutable for the process
/// lifetime. Every difficulty operation receives them explicitly; nothing
/// in the consensus crates reads ambient configuration.
#[derive(Debug, Clone)]
pub struct Params {
    /// The network these parameters describe
    pub network: NetworkType,
    /// Easiest permitted target, the network-wide ceiling
    pub pow_limit: U256,
    /// Desired seconds between blocks
    pub pow_target_spacing: i64,
    /// Desired seconds per difficulty adjustment interval
    pub pow_target_timespan: i64,
    /// Test-network escape valve: permit min-difficulty blocks after a stall
    pub allow_min_difficulty_blocks: bool,
    /// Disables retargeting entirely, fixing difficulty permanently
    pub no_retargeting: bool,
}

impl Params {
    /// Number of blocks between retargets, derived from timespan and spacing
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        (self.pow_target_timespan / self.pow_target_spacing) as u64
    }

    /// Parameters for the given network
    pub fn for_network(network: NetworkType) -> Self {
        match network {
            NetworkType::Mainnet => Self {
                network,
                pow_limit: POW_LIMIT,
                pow_target_spacing: POW_TARGET_SPACING,
                pow_target_timespan: POW_TARGET_TIMESPAN,
                allow_min_difficulty_blocks: false,
                no_retargeting: false,
            },
            NetworkType::Testnet => Self {
                network,
                pow_limit: POW_LIMIT,
                pow_target_spacing: POW_TARGET_SPACING,
                pow_target_timespan: POW_TARGET_TIMESPAN,
                allow_min_difficulty_blocks: true,
                no_retargeting: false,
            },
            NetworkType::Devnet => Self {
                network,
                pow_limit: POW_LIMIT_RELAXED,
                pow_target_spacing: POW_TARGET_SPACING,
                pow_target_timespan: POW_TARGET_TIMESPAN,
                allow_min_difficulty_blocks: true,
                no_retargeting: false,
            },
            NetworkType::Simnet => Self {
                network,
                pow_limit: POW_LIMIT_RELAXED,
                pow_target_spacing: POW_TARGET_SPACING,
                pow_target_timespan: POW_TARGET_TIMESPAN,
                allow_min_difficulty_blocks: true,
                no_retargeting: true,
            },
        }
    }
}

impl From<NetworkType> for Params {
    fn from(network: NetworkType) -> Self {
        Self::for_network(network)
    }
}
