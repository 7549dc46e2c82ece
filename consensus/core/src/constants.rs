use primitive_types::U256;

/// Target time per block in seconds
pub const POW_TARGET_SPACING: i64 = 600;

/// Target time per difficulty adjustment interval in seconds (two weeks)
pub const POW_TARGET_TIMESPAN: i64 = 14 * 24 * 60 * 60;

/// Easiest permitted target on mainnet and testnet
/// (0x00000000ffff repeated f's below, compact form 0x1d00ffff)
pub const POW_LIMIT: U256 = U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_0000_ffff_ffff]);

/// Relaxed target ceiling for devnet and simnet
/// (2^255 - 1, compact form 0x207fffff)
pub const POW_LIMIT_RELAXED: U256 = U256([u64::MAX, u64::MAX, u64::MAX, 0x7fff_ffff_ffff_ffff]);
