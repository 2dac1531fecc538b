use rand::Rng;
use rand::rngs::SmallRng;

/// Draws `n` words uniformly with replacement. Repeats are expected.
///
/// `vocabulary` must be non-empty; every built-in vocabulary is.
pub fn sample_words<'a>(vocabulary: &[&'a str], n: usize, rng: &mut SmallRng) -> Vec<&'a str> {
    debug_assert!(!vocabulary.is_empty(), "sampling from an empty vocabulary");
    (0..n)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
        .collect()
}
