use super::Score;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FORBIDDEN_LETTER: Regex =
        Regex::new(r"Do not use the letter '([a-zA-Z])'").expect("static regex");
    static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").expect("static regex");
}

const VOWEL_ENDING_RULE: &str = "every sentence must end with a word that has exactly three vowels";

/// Validates structural rule-following. Rules are checked in a fixed
/// order and a response carrying both rule types must satisfy both.
pub(crate) fn score(prompt: &str, response: &str) -> Score {
    if let Some(caps) = FORBIDDEN_LETTER.captures(prompt) {
        let forbidden = caps[1].to_lowercase();
        if response.to_lowercase().contains(forbidden.as_str()) {
            return Score::fail(format!(
                "Failed constraint: Included forbidden letter '{}'.",
                forbidden
            ));
        }
    }

    if prompt.contains(VOWEL_ENDING_RULE) {
        let sentences = SENTENCE_SPLIT
            .split(response)
            .map(str::trim)
            .filter(|s| !s.is_empty());
        for (idx, sentence) in sentences.enumerate() {
            let Some(last_word) = sentence.split_whitespace().last() else {
                continue;
            };
            let cleaned: String = last_word
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect();
            let vowels = cleaned
                .chars()
                .filter(|c| "aeiou".contains(c.to_ascii_lowercase()))
                .count();
            if vowels != 3 {
                return Score::fail(format!(
                    "Failed constraint: Sentence {} ends with '{}' which has {} vowels.",
                    idx + 1,
                    cleaned,
                    vowels
                ));
            }
        }
    }

    Score::pass("Passed all algorithmic constraints.")
}
