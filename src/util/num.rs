/// Converts a non-negative literal to `u32` if and only if it fits.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or larger than `u32::MAX`.
///
/// ## Parameters
/// - `value`: The literal value to convert.
/// - `error`: The error to return if the value does not fit.
///
/// ## Returns
/// - `Ok(u32)`: The converted value.
/// - `Err(error)`: If the value is out of range.
///
/// ## Example
/// ```
/// use polyrun::util::num::literal_to_u32;
///
/// assert_eq!(literal_to_u32(7, "too big!"), Ok(7));
/// assert!(literal_to_u32(i64::from(u32::MAX) + 1, "too big!").is_err());
/// assert!(literal_to_u32(-1, "too big!").is_err());
/// ```
pub fn literal_to_u32<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}

/// Raises `base` to `exponent` with two's complement wrapping.
///
/// The result equals repeated multiplication of `base` with itself, reduced
/// modulo 2^64, so it never overflows. Any base to the power 0 is 1.
///
/// ## Example
/// ```
/// use polyrun::util::num::wrapping_power;
///
/// assert_eq!(wrapping_power(3, 4), 81);
/// assert_eq!(wrapping_power(-2, 3), -8);
/// assert_eq!(wrapping_power(0, 0), 1);
/// assert_eq!(wrapping_power(2, 64), 0);
/// ```
#[must_use]
pub const fn wrapping_power(base: i64, exponent: u32) -> i64 {
    base.wrapping_pow(exponent)
}
