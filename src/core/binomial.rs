use num::{BigUint, One, Zero};

/// Exact binomial coefficient `C(n, k)`.
///
/// Selecting more items than exist is not an error, it's just
/// impossible. So `k > n` gives zero, which lets callers sum
/// terms without guarding each one.
///
/// ```
/// use hand_census::core::binomial;
/// use num::BigUint;
///
/// assert_eq!(BigUint::from(2_598_960u32), binomial(52, 5));
/// assert_eq!(BigUint::from(0u32), binomial(3, 4));
/// ```
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    // C(n, k) == C(n, n - k); walk the shorter side.
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 0..k {
        // Dividing after every multiply keeps this exact: the running
        // value is always C(n, i + 1).
        result *= n - i;
        result /= i + 1;
    }
    result
}
