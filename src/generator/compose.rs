use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::generator::TextGenerator;
use crate::generator::paragraph::generate_paragraph;
use crate::generator::request::{GeneratorRequest, UnitType};
use crate::generator::sampling::sample_words;
use crate::generator::sentence::generate_sentence;
use crate::generator::vocabulary::select_vocabulary;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

pub struct LoremGenerator {
    rng: SmallRng,
}

impl LoremGenerator {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Default for LoremGenerator {
    fn default() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl TextGenerator for LoremGenerator {
    fn generate(&mut self, request: &GeneratorRequest) -> String {
        compose(request, &mut self.rng)
    }
}

/// Dispatches on the unit. Never fails: a zero count gives an empty string and
/// `Unknown` gives one paragraph regardless of count and HTML flag.
pub fn compose(request: &GeneratorRequest, rng: &mut SmallRng) -> String {
    tracing::debug!(request = %request, "generating text");
    let vocabulary = select_vocabulary(request.content_type);

    match request.unit {
        UnitType::Words => sample_words(vocabulary, request.count, rng).join(" "),
        UnitType::Sentences => (0..request.count)
            .map(|_| generate_sentence(vocabulary, rng))
            .collect::<Vec<_>>()
            .join(" "),
        UnitType::Paragraphs => (0..request.count)
            .map(|_| {
                let paragraph = generate_paragraph(vocabulary, rng);
                if request.include_html {
                    format!("<p>{paragraph}</p>")
                } else {
                    paragraph
                }
            })
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR),
        UnitType::Unknown => generate_paragraph(vocabulary, rng),
    }
}
