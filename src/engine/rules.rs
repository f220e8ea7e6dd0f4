use super::tokenize::Tokens;
use serde::Serialize;
use Bound::{Exclusive, Inclusive, Open};

pub const BASE_SCORE: f64 = 40.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

const COMMON_WORD_TOP_N: usize = 10;

pub const CLAUSE_MARKERS: [&str; 17] = [
    "although", "though", "while", "whereas", "because", "since", "unless", "if", "when",
    "whenever", "where", "whereby", "that", "which", "who", "whom", "whose",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Open,
    Inclusive(f64),
    Exclusive(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: Bound,
    pub upper: Bound,
    pub delta: f64,
}

impl Band {
    const fn new(lower: Bound, upper: Bound, delta: f64) -> Self {
        Self {
            lower,
            upper,
            delta,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above = match self.lower {
            Bound::Open => true,
            Bound::Inclusive(min) => value >= min,
            Bound::Exclusive(min) => value > min,
        };
        let below = match self.upper {
            Bound::Open => true,
            Bound::Inclusive(max) => value <= max,
            Bound::Exclusive(max) => value < max,
        };
        above && below
    }
}

const SENTENCE_LENGTH_BANDS: [Band; 5] = [
    Band::new(Inclusive(12.0), Inclusive(20.0), 10.0),
    Band::new(Inclusive(8.0), Exclusive(12.0), 5.0),
    Band::new(Exclusive(20.0), Inclusive(25.0), 5.0),
    Band::new(Open, Exclusive(5.0), -15.0),
    Band::new(Exclusive(35.0), Open, -15.0),
];

const VOCABULARY_DIVERSITY_BANDS: [Band; 5] = [
    Band::new(Inclusive(0.35), Inclusive(0.55), 12.0),
    Band::new(Inclusive(0.25), Exclusive(0.35), 6.0),
    Band::new(Exclusive(0.55), Inclusive(0.65), 6.0),
    Band::new(Exclusive(0.75), Open, -12.0),
    Band::new(Open, Exclusive(0.2), -10.0),
];

const PARAGRAPH_COUNT_BANDS: [Band; 5] = [
    Band::new(Inclusive(4.0), Inclusive(12.0), 10.0),
    Band::new(Inclusive(2.0), Exclusive(4.0), 5.0),
    Band::new(Exclusive(12.0), Inclusive(20.0), 5.0),
    Band::new(Exclusive(25.0), Open, -8.0),
    Band::new(Inclusive(1.0), Inclusive(1.0), -8.0),
];

const COMMON_WORD_RATIO_BANDS: [Band; 4] = [
    Band::new(Inclusive(0.15), Inclusive(0.25), 12.0),
    Band::new(Inclusive(0.1), Exclusive(0.15), 6.0),
    Band::new(Exclusive(0.25), Inclusive(0.3), 6.0),
    Band::new(Exclusive(0.4), Open, -10.0),
];

const SPECIAL_CHARACTER_BANDS: [Band; 3] = [
    Band::new(Open, Inclusive(0.05), 8.0),
    Band::new(Exclusive(0.05), Inclusive(0.08), 4.0),
    Band::new(Exclusive(0.12), Open, -15.0),
];

const CLAUSE_COMPLEXITY_BANDS: [Band; 2] = [
    Band::new(Inclusive(0.2), Inclusive(0.5), 8.0),
    Band::new(Exclusive(0.7), Open, -10.0),
];

const CAPITALIZATION_BANDS: [Band; 1] = [Band::new(Exclusive(0.3), Exclusive(0.7), -8.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    SentenceLength,
    VocabularyDiversity,
    ParagraphCount,
    CommonWordRatio,
    SpecialCharacterRatio,
    ClauseComplexity,
    Capitalization,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::SentenceLength,
        Factor::VocabularyDiversity,
        Factor::ParagraphCount,
        Factor::CommonWordRatio,
        Factor::SpecialCharacterRatio,
        Factor::ClauseComplexity,
        Factor::Capitalization,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::SentenceLength => "sentence_length",
            Factor::VocabularyDiversity => "vocabulary_diversity",
            Factor::ParagraphCount => "paragraph_count",
            Factor::CommonWordRatio => "common_word_ratio",
            Factor::SpecialCharacterRatio => "special_character_ratio",
            Factor::ClauseComplexity => "clause_complexity",
            Factor::Capitalization => "capitalization",
        }
    }

    pub fn bands(self) -> &'static [Band] {
        match self {
            Factor::SentenceLength => &SENTENCE_LENGTH_BANDS,
            Factor::VocabularyDiversity => &VOCABULARY_DIVERSITY_BANDS,
            Factor::ParagraphCount => &PARAGRAPH_COUNT_BANDS,
            Factor::CommonWordRatio => &COMMON_WORD_RATIO_BANDS,
            Factor::SpecialCharacterRatio => &SPECIAL_CHARACTER_BANDS,
            Factor::ClauseComplexity => &CLAUSE_COMPLEXITY_BANDS,
            Factor::Capitalization => &CAPITALIZATION_BANDS,
        }
    }

    pub fn measure(self, tokens: &Tokens) -> f64 {
        let words = tokens.word_count();
        let sentences = tokens.sentences.len();
        match self {
            Factor::SentenceLength => ratio(words, sentences),
            Factor::VocabularyDiversity => ratio(tokens.distinct_word_count(), words),
            Factor::ParagraphCount => tokens.paragraph_count as f64,
            Factor::CommonWordRatio => {
                ratio(tokens.top_frequency_total(COMMON_WORD_TOP_N), words)
            }
            Factor::SpecialCharacterRatio => {
                ratio(tokens.special_char_count, tokens.char_count)
            }
            Factor::ClauseComplexity => {
                let markers = tokens
                    .words
                    .iter()
                    .filter(|word| CLAUSE_MARKERS.contains(&word.as_str()))
                    .count();
                ratio(markers, sentences)
            }
            Factor::Capitalization => ratio(tokens.capitalized_count, words),
        }
    }

    /// Delta of the first band holding `value`, or 0 when none does.
    pub fn delta(self, value: f64) -> f64 {
        self.bands()
            .iter()
            .find(|band| band.contains(value))
            .map_or(0.0, |band| band.delta)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator.max(1) as f64
}
