//! Prime listing functions on u64 integers, built on the trial division test

use crate::primality::is_prime;
use std::iter::FusedIterator;
use tracing::debug;

/// This function tests whether a u64 integer is a prime, see [is_prime()](crate::is_prime)
/// for the generic version.
#[inline]
pub fn is_prime64(target: u64) -> bool {
    is_prime(&target)
}

/// Returns all primes **not larger than** limit, sorted ascending.
///
/// Every integer in `[2, limit]` is tested, there's no sieving involved.
pub fn primes(limit: u64) -> Vec<u64> {
    let result: Vec<u64> = (2..=limit).filter(|&n| is_prime64(n)).collect();
    debug!(limit, count = result.len(), "collected primes up to limit");
    result
}

/// Returns the first `count` primes counting from 2, sorted ascending.
pub fn nprimes(count: usize) -> Vec<u64> {
    let result: Vec<u64> = PrimeIter::new().take(count).collect();
    debug!(count, last = ?result.last(), "collected first primes");
    result
}

/// An endless iterator over the primes in ascending order, starting from 2.
///
/// Each candidate is checked with [is_prime64()] and then incremented by one. Nothing
/// is cached, so a fresh iterator always starts over from 2.
#[derive(Debug, Clone)]
pub struct PrimeIter {
    current: u64,
}

impl PrimeIter {
    pub fn new() -> Self {
        PrimeIter { current: 2 }
    }
}

impl Default for PrimeIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.current;
            // stops at the end of the u64 range
            self.current = candidate.checked_add(1)?;
            if is_prime64(candidate) {
                return Some(candidate);
            }
        }
    }
}

impl FusedIterator for PrimeIter {}
