use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::SmallRng;

use crate::generator::sentence::generate_sentence;

pub const PARAGRAPH_SENTENCES: RangeInclusive<usize> = 4..=8;

/// 4 to 8 sentences joined by single spaces. Never contains a line break.
pub fn generate_paragraph(vocabulary: &[&str], rng: &mut SmallRng) -> String {
    let sentence_count = rng.gen_range(PARAGRAPH_SENTENCES);
    (0..sentence_count)
        .map(|_| generate_sentence(vocabulary, rng))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::vocabulary::{ContentType, select_vocabulary};
    use rand::SeedableRng;

    #[test]
    fn sentence_count_in_range() {
        let vocabulary = select_vocabulary(ContentType::Lorem);
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..300 {
            let paragraph = generate_paragraph(vocabulary, &mut rng);
            let sentences = paragraph.matches('.').count();
            assert!(
                PARAGRAPH_SENTENCES.contains(&sentences),
                "{sentences} sentences in: {paragraph}"
            );
        }
    }

    #[test]
    fn single_line() {
        let vocabulary = select_vocabulary(ContentType::Tech);
        let mut rng = SmallRng::seed_from_u64(21);
        for _ in 0..100 {
            let paragraph = generate_paragraph(vocabulary, &mut rng);
            assert!(!paragraph.contains('\n'));
            assert!(!paragraph.contains("  "));
        }
    }

    #[test]
    fn each_sentence_starts_capitalized() {
        let vocabulary = select_vocabulary(ContentType::Startup);
        let mut rng = SmallRng::seed_from_u64(77);
        let paragraph = generate_paragraph(vocabulary, &mut rng);
        for sentence in paragraph.split_inclusive(". ") {
            assert!(sentence.starts_with(|c: char| c.is_uppercase()), "{sentence}");
        }
    }
}
