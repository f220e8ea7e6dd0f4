use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern is valid"));
// Letters, numbers (including superscripts and fractions) and underscore.
// Combining marks are not word characters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));
static SPECIAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("special char pattern is valid"));

const PARAGRAPH_BREAK: &str = "\n\n";

/// Everything the scoring rules read from a text sample, derived in one pass.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
    pub frequencies: HashMap<String, usize>,
    pub paragraph_count: usize,
    pub char_count: usize,
    pub special_char_count: usize,
    pub capitalized_count: usize,
}

impl Tokens {
    pub fn new(text: &str) -> Self {
        let words = words(text);
        let mut frequencies = HashMap::new();
        for word in &words {
            *frequencies.entry(word.clone()).or_insert(0) += 1;
        }

        Self {
            sentences: sentences(text),
            frequencies,
            words,
            paragraph_count: paragraphs(text).len(),
            char_count: text.chars().count(),
            special_char_count: SPECIAL_CHAR.find_iter(text).count(),
            capitalized_count: capitalized_words(text),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn distinct_word_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Total occurrences of the `n` most frequent distinct words.
    pub fn top_frequency_total(&self, n: usize) -> usize {
        let mut counts = self.frequencies.values().copied().collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts.into_iter().take(n).sum()
    }
}

pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|word| word.as_str().to_string())
        .collect()
}

pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_BREAK).collect()
}

fn capitalized_words(text: &str) -> usize {
    WORD.find_iter(text)
        .filter(|word| {
            word.as_str()
                .chars()
                .next()
                .is_some_and(char::is_uppercase)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_punctuation_runs_and_drop_empties() {
        let split = sentences("First one. Second?! Third...   \n\n Fourth");
        assert_eq!(split, vec!["First one", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn sentences_of_punctuation_only_text_are_empty() {
        assert!(sentences("...!?").is_empty());
    }

    #[test]
    fn words_are_lowercased_word_runs() {
        assert_eq!(
            words("Hello, WORLD! snake_case x2 don't"),
            vec!["hello", "world", "snake_case", "x2", "don", "t"]
        );
    }

    #[test]
    fn paragraphs_keep_empty_pieces() {
        assert_eq!(paragraphs("one").len(), 1);
        assert_eq!(paragraphs("one\n\ntwo").len(), 2);
        assert_eq!(paragraphs("one\n\n\n\ntwo").len(), 3);
        assert_eq!(paragraphs("").len(), 1);
    }

    #[test]
    fn tokens_count_frequencies_and_characters() {
        let tokens = Tokens::new("The cat saw the Dog. The end!");
        assert_eq!(tokens.word_count(), 7);
        assert_eq!(tokens.distinct_word_count(), 5);
        assert_eq!(tokens.frequencies.get("the"), Some(&3));
        assert_eq!(tokens.top_frequency_total(2), 4);
        assert_eq!(tokens.special_char_count, 2);
        assert_eq!(tokens.char_count, 29);
        assert_eq!(tokens.capitalized_count, 3);
        assert_eq!(tokens.sentences.len(), 2);
        assert_eq!(tokens.paragraph_count, 1);
    }

    #[test]
    fn other_numbers_are_word_characters_and_combining_marks_are_not() {
        assert_eq!(words("The value x² is ½"), vec!["the", "value", "x²", "is", "½"]);

        let tokens = Tokens::new("Cafe\u{301} au lait");
        assert_eq!(tokens.words, vec!["cafe", "au", "lait"]);
        assert_eq!(tokens.special_char_count, 1);
        assert_eq!(tokens.char_count, 14);
    }

    #[test]
    fn char_count_is_measured_in_characters_not_bytes() {
        let tokens = Tokens::new("héllo wörld");
        assert_eq!(tokens.char_count, 11);
        assert_eq!(tokens.special_char_count, 0);
        assert_eq!(tokens.word_count(), 2);
    }
}
