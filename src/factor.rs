//! Divisor enumeration by trial division

use crate::traits::{PrimalityBase, PrimalityRefBase};
use num_integer::Roots;
use std::collections::BTreeSet;

/// Find all positive divisors of the target, sorted ascending and without duplicates.
///
/// Every `i` in `[1, √target]` dividing the target contributes both `i` and `target / i`.
/// The pair collapses to a single value when the target is a perfect square, so the result
/// has an odd length exactly for squares. Zero has no divisors listed.
pub fn divisors<T: PrimalityBase>(target: &T) -> Vec<T>
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    if target.is_zero() {
        return Vec::new();
    }

    let bound = Roots::sqrt(target);
    let mut result = BTreeSet::new();
    let mut i = T::one();
    while i <= bound {
        let (quotient, remainder) = target.div_rem(&i);
        if remainder.is_zero() {
            result.insert(i.clone());
            result.insert(quotient);
        }
        i = i + T::one();
    }
    result.into_iter().collect()
}
