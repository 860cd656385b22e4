use log::debug;

/// Prime factorisation of `n` in ascending order, with multiplicity
///
/// The sign is ignored. `0` and `±1` have no prime factors.
pub fn prime_factors(n: i64) -> Vec<u64> {
    let mut remaining = n.unsigned_abs();
    let mut factors = Vec::new();

    if remaining < 2 {
        return factors;
    }

    while remaining % 2 == 0 {
        factors.push(2);
        remaining /= 2;
    }

    let mut divisor = 3u64;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }

    if remaining > 1 {
        factors.push(remaining);
    }

    debug!("Prime factors of {}: {:?}", n, factors);
    factors
}
