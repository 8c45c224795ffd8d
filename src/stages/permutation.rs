//! Permutation stage - casing and reversal variants of each base word.

use super::StageResult;
use crate::candidates::{BaseWord, CandidateSet};

/// Builds the initial candidate set from the base words.
///
/// Every word contributes itself, its lowercase, uppercase and title-cased
/// forms, its reversal and the reversal of its lowercase form.
pub fn permute(base: &[BaseWord], limit: Option<usize>) -> StageResult {
    let mut set = CandidateSet::new();
    for word in base {
        for variant in permutations(word.as_str()) {
            set.insert_bounded(variant, limit)?;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Permutation stage: {} base words -> {} candidates", base.len(), set.len());

    Ok(set)
}

/// The six casing/reversal variants of `word`, duplicates included.
pub fn permutations(word: &str) -> [String; 6] {
    let lower = word.to_lowercase();
    let reversed_lower = reverse(&lower);
    [
        word.to_string(),
        word.to_uppercase(),
        title_case(word),
        reverse(word),
        reversed_lower,
        lower,
    ]
}

/// Capitalizes the first char of each whitespace-delimited token and
/// lowercases the rest.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut token_start = true;
    for c in word.chars() {
        if c.is_whitespace() {
            out.push(c);
            token_start = true;
        } else if token_start {
            out.extend(c.to_uppercase());
            token_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Reverses `word` char by char.
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(words: &[&str]) -> Vec<BaseWord> {
        words.iter().filter_map(|w| BaseWord::new(w)).collect()
    }

    #[test]
    fn test_title_case_multiple_tokens() {
        assert_eq!(title_case("mARY jANE"), "Mary Jane");
        assert_eq!(title_case("c4t"), "C4t");
        assert_eq!(title_case("1995"), "1995");
    }

    #[test]
    fn test_reverse_unicode() {
        assert_eq!(reverse("Cat"), "taC");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn test_permute_scenario() {
        let set = permute(&base(&["Cat", "1995"]), None).unwrap();
        for expected in ["Cat", "cat", "CAT", "taC", "tac", "1995", "5991"] {
            assert!(set.contains(expected), "missing {}", expected);
        }
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_permute_digits_collapse() {
        let set = permute(&base(&["2024"]), None).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("4202"));
    }

    #[test]
    fn test_permute_respects_limit() {
        let result = permute(&base(&["Sparky"]), Some(3));
        assert!(result.is_err());
    }

    #[test]
    fn test_permute_superset_of_base() {
        let words = base(&["Jsmith", "Sparky", "Summer"]);
        let set = permute(&words, None).unwrap();
        assert!(set.len() >= words.len());
        assert!(words.iter().all(|w| set.contains(w.as_str())));
    }
}
