//! Compact difficulty target encoding.
//!
//! Block headers carry the 256-bit target in Bitcoin's 32-bit "compact"
//! form: byte 0 is a base-256 exponent, bytes 1-3 are the mantissa, and
//! bit 23 of the mantissa doubles as a sign flag. Every validating node
//! recomputes both directions, so they must agree bit-for-bit.

use primitive_types::U256;

/// Expands compact `bits` into a full 256-bit target.
///
/// Total function: it always returns a value, and callers must check the
/// `negative` and `overflow` flags before trusting it. `negative` is set
/// when the mantissa is non-zero and carries the sign flag; `overflow` is
/// set when the exponent shifts mantissa bits past bit 255.
pub fn compact_to_target(bits: u32) -> (U256, bool, bool) {
    let size = (bits >> 24) as usize;
    let word = bits & 0x007f_ffff;

    let target = if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3))
    };

    // The sign flag only means anything over a non-zero mantissa.
    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

    (target, negative, overflow)
}

/// Packs a 256-bit target into compact form.
///
/// Normalizes to the smallest exponent whose mantissa keeps clear of the
/// sign flag. Inverse of [`compact_to_target`] for every value with at
/// most 24 significant bits; wider values lose their low-order bits, which
/// is the format's intentional precision limit.
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        target.low_u64() << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3))).low_u64()
    };

    // A mantissa with the sign bit set moves one byte into the exponent.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    (compact as u32) | ((size as u32) << 24)
}
