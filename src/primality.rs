//! Primality test by trial division

use crate::traits::{PrimalityBase, PrimalityRefBase};
use num_integer::Roots;

/// Test whether the target is a prime by dividing it with every integer in `[2, √target]`.
///
/// The divisor bound is `floor(sqrt(target)) + 1` used exclusively, so the root of a
/// perfect square is always tried. Integers below 2 are reported as not prime.
pub fn is_prime<T: PrimalityBase>(target: &T) -> bool
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    let two = T::one() + T::one();
    if target < &two {
        return false;
    }

    let bound = Roots::sqrt(target) + T::one();
    let mut divisor = two;
    while divisor < bound {
        if target.is_multiple_of(&divisor) {
            return false;
        }
        divisor = divisor + T::one();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;
    use rand::random;

    const PRIME100: [u64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
        97,
    ];

    /// Sieve of Eratosthenes, bit i is set iff i is composite (or 0, 1)
    fn composite_sieve(limit: usize) -> BitVec {
        let mut sieve = bitvec![0; limit + 1];
        sieve.set(0, true);
        sieve.set(1, true);
        for p in 2..=num_integer::sqrt(limit) {
            if !sieve[p] {
                for multi in (p * p..=limit).step_by(p) {
                    sieve.set(multi, true);
                }
            }
        }
        sieve
    }

    #[test]
    fn small_boundaries_test() {
        assert!(is_prime(&2u64));
        assert!(is_prime(&3u64));
        assert!(!is_prime(&4u64));
        assert!(!is_prime(&9u64));
        assert!(!is_prime(&6u64));
        assert!(!is_prime(&0u64));
        assert!(!is_prime(&1u64));
    }

    #[test]
    fn perfect_square_test() {
        // the square root itself is the only small divisor of p^2
        for &p in PRIME100.iter() {
            assert!(!is_prime(&(p * p)), "{} should be composite", p * p);
        }
        for &p in &[1009u64, 7919, 65521] {
            assert!(!is_prime(&(p * p)));
            assert!(!is_prime(&(p * (p + 2))));
        }
    }

    #[test]
    fn small_primes_test() {
        for x in 2..100u64 {
            assert_eq!(PRIME100.contains(&x), is_prime(&x), "is_prime({})", x);
        }
    }

    #[test]
    fn sieve_agreement_test() {
        let sieve = composite_sieve(1000);
        for x in 2..=1000u64 {
            assert_eq!(!sieve[x as usize], is_prime(&x), "is_prime({})", x);
        }
    }

    #[test]
    fn naive_definition_test() {
        // prime iff no divisor in [2, n-1]
        for x in 2..1000u32 {
            let naive = (2..x).all(|d| x % d != 0);
            assert_eq!(naive, is_prime(&x), "is_prime({})", x);
        }
    }

    #[test]
    fn primitive_types_test() {
        assert!(is_prime(&251u8));
        assert!(!is_prime(&255u8));
        assert!(is_prime(&65521u16));
        assert!(is_prime(&4294967291u32));
        assert!(is_prime(&1000000007u64));
        assert!(!is_prime(&(65521u64 * 65537)));
        assert!(is_prime(&2147483647u128));
        assert!(is_prime(&7919usize));
    }

    #[test]
    fn idempotence_test() {
        for _ in 0..100 {
            let x = random::<u32>() as u64;
            assert_eq!(is_prime(&x), is_prime(&x));
        }
    }

    #[test]
    fn random_composites_test() {
        for _ in 0..100 {
            let x = (random::<u16>() as u64) | 2;
            let y = (random::<u16>() as u64) | 2;
            assert!(!is_prime(&(x * y)), "{} * {}", x, y);
        }
    }

    #[test]
    fn biguint_test() {
        use num_bigint::BigUint;

        assert!(is_prime(&BigUint::from(2u8)));
        assert!(is_prime(&BigUint::from(2u32.pow(19) - 1)));
        assert!(!is_prime(&BigUint::from(2u32.pow(23) - 1)));
        assert!(!is_prime(&BigUint::from(49u8)));
        let sieve = composite_sieve(200);
        for x in 2..=200u32 {
            assert_eq!(!sieve[x as usize], is_prime(&BigUint::from(x)));
        }
    }
}
