//! Internal helpers for masked rejection sampling.
//!
//! It is an implementation detail and not part of the public API.

/// Smallest all-ones bit mask that covers every index of an alphabet of
/// `len` symbols. `len` must be in `2..=256`.
pub(crate) fn mask_for(len: usize) -> u8 {
    debug_assert!((2..=256).contains(&len));
    let bits = usize::BITS - (len - 1).leading_zeros();
    ((1usize << bits) - 1) as u8
}

/// Number of random bytes to request per round when drawing `size` symbols.
///
/// Power-of-two alphabets never reject a byte, so one byte per symbol is
/// enough. Otherwise the request is padded by 1.6x the expected rejection
/// rate so that a single round usually suffices.
pub(crate) fn step_for(mask: u8, size: usize, len: usize) -> usize {
    if len.is_power_of_two() {
        return size;
    }
    (16 * mask as usize)
        .saturating_mul(size)
        .div_ceil(10 * len)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_for() {
        assert_eq!(mask_for(2), 1);
        assert_eq!(mask_for(3), 3);
        assert_eq!(mask_for(16), 15);
        assert_eq!(mask_for(17), 31);
        assert_eq!(mask_for(64), 63);
        assert_eq!(mask_for(65), 127);
        assert_eq!(mask_for(256), 255);
    }

    #[test]
    fn test_step_for() {
        // No rejection for power-of-two alphabets
        assert_eq!(step_for(63, 21, 64), 21);
        // ceil(1.6 * 63 * 21 / 62) = ceil(34.14)
        assert_eq!(step_for(63, 21, 62), 35);
        assert!(step_for(1, 1, 3) >= 1);
    }
}
