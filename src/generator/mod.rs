//! Placeholder text generation.
//!
//! Everything here is a pure function of its inputs and a random source. Storage,
//! clipboard and file output belong to the callers.

pub mod capitalize;
pub mod compose;
pub mod paragraph;
pub mod request;
pub mod sampling;
pub mod sentence;
pub mod vocabulary;

use rand::SeedableRng;
use rand::rngs::SmallRng;

pub use compose::LoremGenerator;
pub use paragraph::generate_paragraph;
pub use request::{GeneratorRequest, UnitType};
pub use sampling::sample_words;
pub use sentence::generate_sentence;
pub use vocabulary::{ContentType, Vocabulary, select_vocabulary};

pub trait TextGenerator {
    fn generate(&mut self, request: &GeneratorRequest) -> String;
}

/// Generates `count` units of text. Each call seeds its own RNG from OS
/// entropy, so concurrent callers share nothing.
pub fn generate_text(
    count: usize,
    unit: UnitType,
    content_type: ContentType,
    include_html: bool,
) -> String {
    let request = GeneratorRequest::new(count, unit, content_type, include_html);
    compose::compose(&request, &mut SmallRng::from_entropy())
}
