use rand::Rng;

/// Number of distinct digit values a structure can hold (0..DIGIT_DOMAIN).
pub const DIGIT_DOMAIN: u8 = 10;

/// Draw a uniformly-random digit that is not already in `occupied`.
///
/// Rejection sampling: candidates are drawn with replacement from
/// 0..DIGIT_DOMAIN until one is free. Callers must keep the occupied count
/// strictly below the domain size or the loop cannot terminate; the
/// structures cap at 8 elements, so this always holds.
pub fn draw_unused_digit<R: Rng + ?Sized>(rng: &mut R, occupied: &[u8]) -> u8 {
    debug_assert!(occupied.len() < DIGIT_DOMAIN as usize);

    loop {
        let candidate = rng.random_range(0..DIGIT_DOMAIN);
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_avoids_occupied_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let occupied = [0, 2, 4, 6, 8];

        for _ in 0..200 {
            let digit = draw_unused_digit(&mut rng, &occupied);
            assert!(digit < DIGIT_DOMAIN);
            assert!(!occupied.contains(&digit));
        }
    }

    #[test]
    fn test_draw_with_single_free_digit() {
        let mut rng = StdRng::seed_from_u64(7);
        // Everything but 3 is taken
        let occupied = [0, 1, 2, 4, 5, 6, 7, 8, 9];

        for _ in 0..50 {
            assert_eq!(draw_unused_digit(&mut rng, &occupied), 3);
        }
    }

    #[test]
    fn test_draw_from_empty_occupied_stays_in_domain() {
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..200 {
            assert!(draw_unused_digit(&mut rng, &[]) < DIGIT_DOMAIN);
        }
    }
}
