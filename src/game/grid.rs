use rand::Rng;

use crate::utils::letters::get_cumulative_distribution;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate the flat, row-major letters of a `width` x `height` board
    /// with weighted letter distribution
    pub fn generate(width: usize, height: usize) -> String {
        Self::generate_with(width, height, &mut rand::rng())
    }

    pub fn generate_with(width: usize, height: usize, rng: &mut impl Rng) -> String {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, total)| *total);

        (0..width * height)
            .map(|_| Self::random_letter(&cumulative_dist, total, &mut *rng))
            .collect()
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_grid_generation() {
        let letters = GridGenerator::generate(4, 3);
        assert_eq!(letters.chars().count(), 12);
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let a = GridGenerator::generate_with(5, 5, &mut StdRng::seed_from_u64(7));
        let b = GridGenerator::generate_with(5, 5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_board() {
        assert!(GridGenerator::generate(0, 4).is_empty());
    }
}
