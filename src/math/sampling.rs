use rand::Rng;

/// Draws a value from `[min, max]` snapped to `increment` steps above `min`.
///
/// Computes `min + floor(u * ceil((max - min) / increment)) * increment` for a
/// uniform `u` in `[0, 1)`. The result never reaches `max` unless
/// `min == max`, and is slightly biased toward `min` when the range is not a
/// whole number of increments.
///
/// The caller guarantees `min <= max` and `increment > 0`.
pub fn sample_quantized<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, increment: f64) -> f64 {
    let steps = ((max - min) / increment).ceil();
    let u: f64 = rng.gen();
    min + (u * steps).floor() * increment
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!((sample_quantized(&mut rng, 5.0, 5.0, 0.25) - 5.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn draws_land_on_increment_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = sample_quantized(&mut rng, 30.0, 100.0, 5.0);
            assert!((30.0..100.0).contains(&v), "v={v}");
            assert!((v % 5.0).abs() < 1e-12, "v={v} is off grid");
        }
    }

    #[test]
    fn negative_lower_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let v = sample_quantized(&mut rng, -10.0, 10.0, 5.0);
            let slot = ((v + 10.0) / 5.0).round();
            assert!((0.0..4.0).contains(&slot), "v={v}");
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                seen[slot as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "every step should be reachable");
    }

    #[test]
    fn partial_last_step_is_reachable() {
        // 3..8 by 0.75 => ceil(6.67) = 7 steps, the last one lands on 7.5
        let mut rng = StdRng::seed_from_u64(11);
        let max_seen = (0..2000)
            .map(|_| sample_quantized(&mut rng, 3.0, 8.0, 0.75))
            .fold(f64::MIN, f64::max);
        assert!((max_seen - 7.5).abs() < 1e-12, "max_seen={max_seen}");
    }
}
