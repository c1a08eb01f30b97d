//! Numeric value generators.
//!
//! Every bound is inclusive. One-sided and unbounded specs draw from a window
//! of [`DEFAULT_WINDOW`] starting (or ending) at the bound.

use fixture_core::{Bounds, Value};
use rand::Rng;

/// Width of the range used when a spec leaves one or both ends open.
pub const DEFAULT_WINDOW: i64 = 1000;

/// Generate a real number: `[0, W)`, `[X, X+W)`, `(X-W, X]` or `[A, B]`.
pub fn generate_number<R: Rng>(rng: &mut R, bounds: &Bounds<f64>) -> Value {
    let window = DEFAULT_WINDOW as f64;
    let value = match *bounds {
        Bounds::Unbounded => rng.gen::<f64>() * window,
        Bounds::AtLeast(lower) => lower + rng.gen::<f64>() * window,
        Bounds::AtMost(upper) => upper - rng.gen::<f64>() * window,
        Bounds::Between(lower, upper) => rng.gen_range(lower..=upper),
    };
    Value::Number(value)
}

/// Generate a whole number: `[0, W-1]`, `[X, X+W-1]`, `[X-W+1, X]` or `[A, B]`.
///
/// Drawn directly in the integer domain so the inclusive contract holds at
/// both ends.
pub fn generate_integer<R: Rng>(rng: &mut R, bounds: &Bounds<i64>) -> Value {
    let span = DEFAULT_WINDOW - 1;
    let value = match *bounds {
        Bounds::Unbounded => rng.gen_range(0..=span),
        Bounds::AtLeast(lower) => rng.gen_range(lower..=lower.saturating_add(span)),
        Bounds::AtMost(upper) => rng.gen_range(upper.saturating_sub(span)..=upper),
        Bounds::Between(lower, upper) => rng.gen_range(lower..=upper),
    };
    Value::Integer(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn number(rng: &mut StdRng, bounds: Bounds<f64>) -> f64 {
        match generate_number(rng, &bounds) {
            Value::Number(v) => v,
            other => panic!("Expected Number value, got {other:?}"),
        }
    }

    fn integer(rng: &mut StdRng, bounds: Bounds<i64>) -> i64 {
        match generate_integer(rng, &bounds) {
            Value::Integer(v) => v,
            other => panic!("Expected Integer value, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_number_unbounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = number(&mut rng, Bounds::Unbounded);
            assert!((0.0..1000.0).contains(&v));
        }
    }

    #[test]
    fn test_generate_number_at_least() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = number(&mut rng, Bounds::AtLeast(3.2));
            assert!(v >= 3.2 && v < 1003.2, "{v}");
        }
    }

    #[test]
    fn test_generate_number_at_most() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = number(&mut rng, Bounds::AtMost(-3.2));
            assert!(v <= -3.2 && v > -1003.2, "{v}");
        }
    }

    #[test]
    fn test_generate_number_between() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = number(&mut rng, Bounds::Between(1.2, 2.3));
            assert!((1.2..=2.3).contains(&v));
        }
        assert_eq!(number(&mut rng, Bounds::Between(5.0, 5.0)), 5.0);
    }

    #[test]
    fn test_generate_integer_between_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<i64> = (0..200)
            .map(|_| integer(&mut rng, Bounds::Between(4, 8)))
            .collect();

        assert!(values.iter().all(|v| (4..=8).contains(v)));
        assert!(values.contains(&4));
        assert!(values.contains(&8));
    }

    #[test]
    fn test_generate_integer_one_sided() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = integer(&mut rng, Bounds::AtLeast(3));
            assert!((3..=1002).contains(&v));
            let v = integer(&mut rng, Bounds::AtMost(3));
            assert!((-996..=3).contains(&v));
            let v = integer(&mut rng, Bounds::Unbounded);
            assert!((0..=999).contains(&v));
        }
    }

    #[test]
    fn test_generate_integer_near_limits() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(integer(&mut rng, Bounds::AtLeast(i64::MAX - 1)) >= i64::MAX - 1);
        assert!(integer(&mut rng, Bounds::AtMost(i64::MIN + 1)) <= i64::MIN + 1);
    }
}
