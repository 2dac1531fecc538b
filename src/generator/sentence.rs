use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::SmallRng;

use crate::generator::capitalize::capitalize_first;
use crate::generator::sampling::sample_words;

pub const SENTENCE_WORDS: RangeInclusive<usize> = 8..=15;

/// One sentence of 8 to 15 words: first letter capitalized, single trailing period.
pub fn generate_sentence(vocabulary: &[&str], rng: &mut SmallRng) -> String {
    let word_count = rng.gen_range(SENTENCE_WORDS);
    let words = sample_words(vocabulary, word_count, rng);

    let mut sentence = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            sentence.push_str(&capitalize_first(word));
        } else {
            sentence.push(' ');
            sentence.push_str(word);
        }
    }
    sentence.push('.');
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::vocabulary::{ContentType, select_vocabulary};
    use rand::SeedableRng;

    #[test]
    fn word_count_in_range() {
        let vocabulary = select_vocabulary(ContentType::Lorem);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let sentence = generate_sentence(vocabulary, &mut rng);
            let words = sentence.split(' ').count();
            assert!(SENTENCE_WORDS.contains(&words), "{words} words in: {sentence}");
        }
    }

    #[test]
    fn capitalized_and_single_period() {
        let vocabulary = select_vocabulary(ContentType::Hipster);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            let sentence = generate_sentence(vocabulary, &mut rng);
            assert!(sentence.starts_with(|c: char| c.is_uppercase()), "{sentence}");
            assert!(sentence.ends_with('.'));
            assert_eq!(sentence.matches('.').count(), 1);
        }
    }

    #[test]
    fn only_first_word_is_capitalized() {
        let vocabulary = select_vocabulary(ContentType::Tech);
        let mut rng = SmallRng::seed_from_u64(11);
        let sentence = generate_sentence(vocabulary, &mut rng);
        let body = sentence.trim_end_matches('.');
        let mut words = body.split(' ');
        let first = words.next().unwrap();
        assert!(vocabulary.contains(&first.to_lowercase().as_str()));
        for word in words {
            assert!(vocabulary.contains(&word), "{word} not in vocabulary");
        }
    }

    #[test]
    fn hits_both_range_bounds() {
        let vocabulary = select_vocabulary(ContentType::Startup);
        let mut rng = SmallRng::seed_from_u64(5);
        let counts: Vec<usize> = (0..2_000)
            .map(|_| generate_sentence(vocabulary, &mut rng).split(' ').count())
            .collect();
        assert!(counts.contains(SENTENCE_WORDS.start()));
        assert!(counts.contains(SENTENCE_WORDS.end()));
    }
}
