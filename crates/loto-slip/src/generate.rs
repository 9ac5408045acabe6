use crate::slip::{MAX_NUMBER, MIN_NUMBER, MIN_NUMBERS};
use rand::Rng as _;

/// Draw a random valid set of chosen numbers: the minimum count of
/// distinct numbers within range, sorted ascending.
pub fn quick_pick() -> Vec<i32> {
    quick_pick_with(&mut rand::thread_rng())
}

/// Same as [`quick_pick`] but with a caller-supplied generator, so tests
/// can seed it.
pub fn quick_pick_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Vec<i32> {
    let mut numbers: Vec<i32> = Vec::with_capacity(MIN_NUMBERS);
    while numbers.len() < MIN_NUMBERS {
        let n = rng.gen_range(MIN_NUMBER..=MAX_NUMBER);
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }
    numbers.sort_unstable();
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slip::Slip;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    #[test]
    fn quick_pick_is_always_a_valid_slip() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let numbers = quick_pick_with(&mut rng);
            let slip = Slip {
                person_id: "quick".to_owned(),
                numbers,
            };
            assert!(slip.check().is_ok(), "seed {seed} produced {slip}");
        }
    }

    #[test]
    fn quick_pick_is_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let numbers = quick_pick_with(&mut rng);
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }
}
