//! The fixed digit alphabet: every decimal digit is pronounced as one letter,
//! so a two-digit number reads as a pair of initials.

use crate::error::{DominicError, Result};

/// Letter for each digit, indexed by the digit itself.
pub const ALPHABET: [char; 10] = ['O', 'A', 'B', 'C', 'D', 'E', 'S', 'G', 'H', 'N'];

/// Encode a single digit. Anything outside `0..=9` is rejected.
pub fn encode(digit: u32) -> Result<char> {
    ALPHABET
        .get(digit as usize)
        .copied()
        .ok_or(DominicError::InvalidDigit(digit))
}

/// Letter pair for `num` read as a two-digit number (`7` reads as `07`).
///
/// The tens component is `num / 10` with no further reduction, so for
/// `num >= 100` it is no longer a single digit and encoding fails with
/// [`DominicError::InvalidDigit`].
pub fn mnemonic_pair(num: u64) -> Result<(char, char)> {
    let tens = if num >= 10 { num / 10 } else { 0 };
    let ones = num % 10;
    Ok((encode(digit_of(tens))?, encode(digit_of(ones))?))
}

/// Both letters of [`mnemonic_pair`] as a label, e.g. `15` → `"AE"`.
pub fn code(num: u64) -> Result<String> {
    let (first, second) = mnemonic_pair(num)?;
    Ok([first, second].iter().collect())
}

// Saturate so out-of-range tens still surface as InvalidDigit instead of wrapping.
fn digit_of(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
