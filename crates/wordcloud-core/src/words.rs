use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};

const COLLOCATION_MIN_COUNT: usize = 2;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w[\w']+").expect("word pattern compiles"));

#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// Count relative to the most frequent word, in `(0, 1]`.
    pub weight: f32,
}

/// Counts words in `text`, most frequent first, keeping at most `max_words`.
///
/// Stopwords match case-insensitively. Case variants are merged under their
/// most frequent spelling and plurals fold into an existing singular.
pub fn count_words(
    text: &str,
    stopwords: &BTreeSet<String>,
    collocations: bool,
    max_words: usize,
) -> Vec<WordFrequency> {
    let stop: HashSet<String> = stopwords.iter().map(|w| w.to_lowercase()).collect();
    let tokens = tokenize(text);

    let mut phrases = Vec::new();
    let mut consumed: HashMap<String, usize> = HashMap::new();
    if collocations {
        for (phrase, count, parts) in collect_bigrams(&tokens, &stop) {
            for part in parts {
                *consumed.entry(part).or_default() += count;
            }
            phrases.push((phrase, count));
        }
    }

    let words: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|word| !stop.contains(&word.to_lowercase()))
        .collect();
    let mut counts = fold_tokens(&words);
    for (word, count) in counts.iter_mut() {
        if let Some(used) = consumed.get(&word.to_lowercase()) {
            *count = count.saturating_sub(*used);
        }
    }
    counts.retain(|(_, count)| *count > 0);
    counts.extend(phrases);

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(max_words);
    let max_count = counts.first().map(|(_, count)| *count).unwrap_or(1).max(1);
    counts
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word,
            count,
            weight: count as f32 / max_count as f32,
        })
        .collect()
}

pub(crate) fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| {
            let word = m.as_str();
            if word.to_lowercase().ends_with("'s") {
                word[..word.len() - 2].to_string()
            } else {
                word.to_string()
            }
        })
        .filter(|word| !word.is_empty() && !word.chars().all(|c| c.is_ascii_digit()))
        .collect()
}

// Groups by lowercase form, merges plurals, then names each group after its
// most common spelling. Ties go to the spelling seen first.
pub(crate) fn fold_tokens(words: &[&str]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<(String, usize)>> = HashMap::new();
    for word in words {
        let key = word.to_lowercase();
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        bump(group, word, 1);
    }

    let keys = order.clone();
    for key in keys {
        if !key.ends_with('s') || key.ends_with("ss") {
            continue;
        }
        let singular = &key[..key.len() - 1];
        if !groups.contains_key(singular) {
            continue;
        }
        let Some(plural) = groups.remove(&key) else {
            continue;
        };
        if let Some(group) = groups.get_mut(singular) {
            for (word, count) in plural {
                let mut chars = word.chars();
                chars.next_back();
                bump(group, chars.as_str(), count);
            }
        }
        order.retain(|existing| existing != &key);
    }

    order
        .iter()
        .filter_map(|key| groups.get(key))
        .filter_map(|group| {
            let total = group.iter().map(|(_, count)| count).sum();
            let mut best: Option<&(String, usize)> = None;
            for entry in group {
                if best.is_none_or(|current| entry.1 > current.1) {
                    best = Some(entry);
                }
            }
            best.map(|(word, _)| (word.clone(), total))
        })
        .collect()
}

fn bump(group: &mut Vec<(String, usize)>, word: &str, count: usize) {
    if let Some(entry) = group.iter_mut().find(|(existing, _)| existing == word) {
        entry.1 += count;
    } else {
        group.push((word.to_string(), count));
    }
}

fn collect_bigrams(
    tokens: &[String],
    stop: &HashSet<String>,
) -> Vec<(String, usize, [String; 2])> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, (usize, [String; 2])> = HashMap::new();
    for pair in tokens.windows(2) {
        let first = pair[0].to_lowercase();
        let second = pair[1].to_lowercase();
        if stop.contains(&first) || stop.contains(&second) || first == second {
            continue;
        }
        let phrase = format!("{} {}", pair[0], pair[1]);
        let entry = counts.entry(phrase.clone()).or_insert_with(|| {
            order.push(phrase);
            (0, [first, second])
        });
        entry.0 += 1;
    }
    order
        .into_iter()
        .filter_map(|phrase| {
            let (count, parts) = counts.remove(&phrase)?;
            (count >= COLLOCATION_MIN_COUNT).then_some((phrase, count, parts))
        })
        .collect()
}
