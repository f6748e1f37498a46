//! Primality check used by the "Is this prime?" dialog.

use std::fmt;

/// Returns true if `n` is prime.
///
/// Every integer has an answer: values `<= 1` are never prime. After
/// ruling out even numbers only odd divisors are tried. The bound is
/// checked as `d <= n / d`, so nothing is squared and the loop cannot
/// overflow even for `i64::MAX`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// A primality judgment for one frozen value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeVerdict {
    pub value: i64,
    pub prime: bool,
}

impl PrimeVerdict {
    /// Runs the check once for `value`.
    pub fn judge(value: i64) -> Self {
        Self {
            value,
            prime: is_prime(value),
        }
    }
}

impl fmt::Display for PrimeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prime {
            write!(f, "{} is prime 🎉", self.value)
        } else {
            write!(f, "{} is not prime :(", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_and_one_are_not_prime() {
        for n in [i64::MIN, -97, -7, -2, -1, 0, 1] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn two_and_three_are_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
    }

    #[test]
    fn small_composites() {
        for n in [4, 6, 8, 9, 15, 25, 49, 100, 121] {
            assert!(!is_prime(n), "{n} should be composite");
        }
    }

    #[test]
    fn small_primes() {
        for n in [5, 7, 11, 13, 29, 97, 101] {
            assert!(is_prime(n), "{n} should be prime");
        }
    }

    #[test]
    fn large_values_do_not_overflow() {
        assert!(is_prime(2_147_483_647));
        // 2^63 - 1 = 7^2 * 73 * ... so trial division exits early.
        assert!(!is_prime(i64::MAX));
        assert!(!is_prime(2_147_483_647 * 3));
    }

    #[test]
    fn odd_squares_and_prime_products() {
        assert!(!is_prime(9));
        assert!(!is_prime(3 * 3 * 3));
        assert!(!is_prime(65_521 * 65_521));
        assert!(!is_prime(1_000_003 * 999_983));
        assert!(is_prime(65_521));
        assert!(is_prime(1_000_003));
    }

    #[test]
    fn agrees_with_naive_trial_division() {
        let naive = |n: i64| n > 1 && (2..n).all(|d| n % d != 0);
        for n in -10..2_000 {
            assert_eq!(is_prime(n), naive(n), "mismatch at {n}");
        }
    }

    #[test]
    fn verdict_text() {
        assert_eq!(PrimeVerdict::judge(7).to_string(), "7 is prime 🎉");
        assert_eq!(PrimeVerdict::judge(8).to_string(), "8 is not prime :(");
        assert_eq!(PrimeVerdict::judge(-1).to_string(), "-1 is not prime :(");
    }
}
