use crate::{Coords, GridInt};

use rand::Rng;

/// Picks a cell uniformly over the whole board. Cells covered by the snake are not
/// excluded, so food can land under the body.
pub fn place_food<R: Rng + ?Sized>(grid_size: GridInt, rng: &mut R) -> Coords {
    (rng.gen_range(0..grid_size), rng.gen_range(0..grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn food_stays_on_the_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let (x, y) = place_food(20, &mut rng);
            assert!(x < 20 && y < 20);
        }
    }

    #[test]
    fn food_reaches_every_corner() {
        let mut rng = StdRng::seed_from_u64(99);
        let seen: Vec<Coords> = (0..5000).map(|_| place_food(3, &mut rng)).collect();
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert!(seen.contains(&corner), "never placed at {:?}", corner);
        }
    }

    #[test]
    fn same_seed_same_placement() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(place_food(20, &mut a), place_food(20, &mut b));
        }
    }
}
