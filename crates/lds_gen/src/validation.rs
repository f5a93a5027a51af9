//! Argument validation for generator construction.
//!
//! Every constructor in the crate runs its bases through [`validate_base`] or
//! [`validate_bases`] before building any state. A base below 2 is rejected
//! with [`LdsError::InvalidBase`]; a composite base is accepted but produces a
//! [`UniformityWarning`], which is both returned to the caller and emitted as
//! a `tracing` warning event.
//!
//! ## Prime Table
//!
//! [`PRIME_TABLE`] holds the first 1000 primes, evaluated at compile time.
//! Distinct small primes are the recommended bases for multi-dimensional
//! generators.

use std::fmt;

use tracing::warn;

use crate::types::LdsError;

/// Number of entries in [`PRIME_TABLE`].
pub const PRIME_TABLE_LEN: usize = 1000;

/// The first 1000 primes, `2..=7919`.
///
/// # Examples
/// ```
/// use lds_gen::validation::PRIME_TABLE;
///
/// assert_eq!(&PRIME_TABLE[..5], &[2, 3, 5, 7, 11]);
/// assert_eq!(PRIME_TABLE[999], 7919);
/// ```
pub const PRIME_TABLE: [u64; PRIME_TABLE_LEN] = first_primes::<PRIME_TABLE_LEN>();

const fn first_primes<const N: usize>() -> [u64; N] {
    let mut table = [0u64; N];
    let mut found = 0;
    let mut candidate = 2;
    while found < N {
        if is_prime(candidate) {
            table[found] = candidate;
            found += 1;
        }
        candidate += 1;
    }
    table
}

/// Returns `true` if `n` is prime.
///
/// Trial division by the primes up to 37 settles every `n < 37²`; larger
/// values use a Miller-Rabin test with those 12 primes as witnesses, which
/// is deterministic over the whole `u64` range.
///
/// # Examples
/// ```
/// use lds_gen::validation::is_prime;
///
/// assert!(is_prime(7919));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// assert!(is_prime(u64::MAX - 58));
/// ```
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 0;
    while i < WITNESSES.len() {
        let p = WITNESSES[i];
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
        i += 1;
    }
    if n < 37 * 37 {
        return true;
    }

    // n - 1 = d · 2^s with d odd
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    let mut i = 0;
    while i < WITNESSES.len() {
        let mut x = pow_mod(WITNESSES[i], d, n);
        i += 1;
        if x == 1 || x == n - 1 {
            continue;
        }
        let mut r = 1;
        let mut witnessed = true;
        while r < s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                witnessed = false;
                break;
            }
            r += 1;
        }
        if witnessed {
            return false;
        }
    }
    true
}

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

const fn pow_mod(base: u64, exp: u64, m: u64) -> u64 {
    let mut result = 1;
    let mut base = base % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Advisory diagnostic for a composite base.
///
/// Construction still succeeds; the generator is deterministic but its
/// output is no longer guaranteed to be low-discrepancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformityWarning {
    /// Name of the generator that received the base.
    pub generator: &'static str,
    /// Position of the base in a base list, if it came from one.
    pub index: Option<usize>,
    /// The composite base.
    pub base: u64,
}

impl fmt::Display for UniformityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(
                f,
                "{} non-prime base[{}] ({}) may reduce uniformity. Consider using prime bases",
                self.generator, i, self.base
            ),
            None => write!(
                f,
                "Non-prime base ({}) may reduce sequence uniformity. \
                 Consider using prime bases from: {:?}",
                self.base,
                &PRIME_TABLE[..10]
            ),
        }
    }
}

fn check_base(
    base: u64,
    index: Option<usize>,
    generator: &'static str,
) -> Result<Option<UniformityWarning>, LdsError> {
    if base < 2 {
        return Err(LdsError::InvalidBase { generator, base });
    }
    if is_prime(base) {
        return Ok(None);
    }
    let warning = UniformityWarning {
        generator,
        index,
        base,
    };
    warn!(generator, base, index = ?index, "{}", warning);
    Ok(Some(warning))
}

/// Validates a single base.
///
/// # Errors
///
/// Returns [`LdsError::InvalidBase`] if `base < 2`.
///
/// # Returns
///
/// `Some(UniformityWarning)` when the base is composite, `None` when prime.
///
/// # Examples
/// ```
/// use lds_gen::validation::validate_base;
///
/// assert_eq!(validate_base(3, "VdCorput"), Ok(None));
/// assert!(validate_base(4, "VdCorput").unwrap().is_some());
/// assert!(validate_base(1, "VdCorput").is_err());
/// ```
pub fn validate_base(
    base: u64,
    generator: &'static str,
) -> Result<Option<UniformityWarning>, LdsError> {
    check_base(base, None, generator)
}

/// Validates every base in a list.
///
/// # Errors
///
/// - [`LdsError::EmptyBases`] if `bases` is empty
/// - [`LdsError::InvalidBase`] for the first base below 2
///
/// # Returns
///
/// One warning per composite base, in list order.
pub fn validate_bases(
    bases: &[u64],
    generator: &'static str,
) -> Result<Vec<UniformityWarning>, LdsError> {
    if bases.is_empty() {
        return Err(LdsError::EmptyBases { generator });
    }
    let mut warnings = Vec::new();
    for (i, &base) in bases.iter().enumerate() {
        if let Some(w) = check_base(base, Some(i), generator)? {
            warnings.push(w);
        }
    }
    Ok(warnings)
}

/// Validates the scale of an integer generator and returns `base^scale`.
///
/// # Errors
///
/// Returns [`LdsError::InvalidScale`] if `scale == 0` or `base^scale`
/// overflows `u64`, which it does for every base once `scale >= 64`.
///
/// # Examples
/// ```
/// use lds_gen::validation::validate_scale;
///
/// assert_eq!(validate_scale(2, 10, "VdCorputInt"), Ok(1024));
/// assert!(validate_scale(2, 0, "VdCorputInt").is_err());
/// assert!(validate_scale(3, 64, "VdCorputInt").is_err());
/// ```
pub fn validate_scale(base: u64, scale: u32, generator: &'static str) -> Result<u64, LdsError> {
    if scale < 1 {
        return Err(LdsError::InvalidScale {
            generator,
            base,
            scale,
        });
    }
    base.checked_pow(scale).ok_or(LdsError::InvalidScale {
        generator,
        base,
        scale,
    })
}

/// Converts a signed seed into the unsigned counter value used by `reseed`.
///
/// # Errors
///
/// Returns [`LdsError::NegativeSeed`] for `seed < 0`.
pub fn validate_seed(seed: i64) -> Result<u64, LdsError> {
    u64::try_from(seed).map_err(|_| LdsError::NegativeSeed(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        for p in [2, 3, 5, 7, 11, 13, 17, 19, 23, 29] {
            assert!(is_prime(p), "{} should be prime", p);
        }
    }

    #[test]
    fn test_small_composites() {
        for c in [4, 6, 8, 9, 10, 12, 14, 15, 16, 25] {
            assert!(!is_prime(c), "{} should be composite", c);
        }
    }

    #[test]
    fn test_edge_cases() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
    }

    #[test]
    fn test_larger_values() {
        assert!(is_prime(7907));
        assert!(is_prime(104_729));
        assert!(!is_prime(7917));
        assert!(!is_prime(1_000_000));
    }

    #[test]
    fn test_near_u64_max() {
        // largest prime below 2^64
        assert!(is_prime(u64::MAX - 58));
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(u64::MAX - 1));
        // 4294967291 is the largest prime below 2^32
        assert!(!is_prime(4_294_967_291 * 4_294_967_291));
    }

    #[test]
    fn test_strong_pseudoprimes_rejected() {
        // Carmichael number, and a strong pseudoprime to bases 2, 3, 5, 7
        assert!(!is_prime(561));
        assert!(!is_prime(3_215_031_751));
        assert!(!is_prime(3_825_123_056_546_413_051));
    }

    #[test]
    fn test_matches_trial_division() {
        fn trial(n: u64) -> bool {
            n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
        }
        for n in 0..20_000 {
            assert_eq!(is_prime(n), trial(n), "n = {}", n);
        }
    }

    #[test]
    fn test_huge_prime_base_accepted() {
        assert_eq!(validate_base(u64::MAX - 58, "VdCorput"), Ok(None));
        assert!(validate_base(u64::MAX, "VdCorput").unwrap().is_some());
    }

    #[test]
    fn test_prime_table_is_exactly_the_primes() {
        let expected: Vec<u64> = (2..=7919).filter(|&n| is_prime(n)).collect();
        assert_eq!(expected.len(), PRIME_TABLE_LEN);
        assert_eq!(&PRIME_TABLE[..], &expected[..]);
    }

    #[test]
    fn test_prime_base_has_no_warning() {
        assert_eq!(validate_base(2, "VdCorput"), Ok(None));
        assert_eq!(validate_base(7919, "VdCorput"), Ok(None));
    }

    #[test]
    fn test_composite_base_warns() {
        let warning = validate_base(10, "VdCorput").unwrap().unwrap();
        assert_eq!(warning.base, 10);
        assert_eq!(warning.index, None);
        assert!(warning.to_string().contains("Non-prime base (10)"));
        assert!(warning.to_string().contains("[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]"));
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert_eq!(
            validate_base(0, "Circle"),
            Err(LdsError::InvalidBase {
                generator: "Circle",
                base: 0
            })
        );
        assert!(validate_base(1, "Circle").is_err());
    }

    #[test]
    fn test_bases_collects_warnings_in_order() {
        let warnings = validate_bases(&[2, 4, 5, 9], "HaltonN").unwrap();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].index, Some(1));
        assert_eq!(warnings[1].index, Some(3));
        assert!(warnings[1].to_string().contains("HaltonN non-prime base[3] (9)"));
    }

    #[test]
    fn test_bases_empty_rejected() {
        assert_eq!(
            validate_bases(&[], "HaltonN"),
            Err(LdsError::EmptyBases {
                generator: "HaltonN"
            })
        );
    }

    #[test]
    fn test_bases_invalid_entry_rejected() {
        let result = validate_bases(&[2, 3, 1], "SphereN");
        assert!(matches!(
            result,
            Err(LdsError::InvalidBase {
                generator: "SphereN",
                base: 1
            })
        ));
    }

    #[test]
    fn test_scale() {
        assert_eq!(validate_scale(3, 7, "HaltonInt"), Ok(2187));
        assert_eq!(validate_scale(2, 63, "HaltonInt"), Ok(1 << 63));
        assert!(matches!(
            validate_scale(2, 64, "HaltonInt"),
            Err(LdsError::InvalidScale { scale: 64, .. })
        ));
    }

    #[test]
    fn test_scale_beyond_u64_digits_is_an_error() {
        // no base >= 2 has 65 digits in u64
        for base in [2, 3, 7919] {
            assert_eq!(
                validate_scale(base, 65, "VdCorputInt"),
                Err(LdsError::InvalidScale {
                    generator: "VdCorputInt",
                    base,
                    scale: 65
                })
            );
        }
    }

    #[test]
    fn test_seed() {
        assert_eq!(validate_seed(0), Ok(0));
        assert_eq!(validate_seed(42), Ok(42));
        assert_eq!(validate_seed(-1), Err(LdsError::NegativeSeed(-1)));
    }
}
