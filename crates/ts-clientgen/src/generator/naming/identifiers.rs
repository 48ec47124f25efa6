use std::sync::LazyLock;

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

static WORD_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());
static INVALID_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^a-zA-Z_$]|[^a-zA-Z0-9_$]").unwrap());

/// Splits free text into words on separators and case boundaries.
/// Transliterates to ASCII first, so `"Größe"` yields `["Grosse"]`.
pub(crate) fn split_words(input: &str) -> Vec<String> {
  let ascii = any_ascii(input);

  WORD_SEPARATOR_RE
    .split(&ascii)
    .filter(|chunk| !chunk.is_empty())
    .flat_map(split_case_boundaries)
    .collect()
}

/// Splits a single alphanumeric chunk on lower-to-upper transitions.
/// Handles adjacent uppercase letters correctly (e.g., `"XMLParser"` -> `["XML", "Parser"]`).
fn split_case_boundaries(chunk: &str) -> Vec<String> {
  let mut words = vec![];
  let mut current_word = String::new();
  let chars: Vec<char> = chunk.chars().collect();

  for (i, &ch) in chars.iter().enumerate() {
    if ch.is_ascii_uppercase() && !current_word.is_empty() {
      let prev_is_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
      let next_is_lower = i + 1 < chars.len() && chars[i + 1].is_ascii_lowercase();

      if prev_is_lower || next_is_lower {
        words.push(std::mem::take(&mut current_word));
      }
    }
    current_word.push(ch);
  }

  if !current_word.is_empty() {
    words.push(current_word);
  }

  words
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}

/// `"filter current"` -> `"FilterCurrent"`. Uppercase runs are kept as written.
pub fn to_pascal_case(input: &str) -> String {
  split_words(input).iter().map(|word| capitalize(word)).collect()
}

/// `"GET /pets/{petId}"` -> `"getPetsPetId"`. Uppercase runs are folded.
pub fn to_camel_case(input: &str) -> String {
  split_words(input)
    .iter()
    .enumerate()
    .map(|(index, word)| {
      let lower = word.to_ascii_lowercase();
      if index == 0 { lower } else { capitalize(&lower) }
    })
    .collect()
}

/// `"PetCategory"` -> `"pet-category"`.
pub fn to_kebab_case(input: &str) -> String {
  split_words(input).join(" ").to_kebab_case()
}

/// Whether `name` can be written as a bare TypeScript identifier or property key.
pub fn is_valid_name(name: &str) -> bool {
  !INVALID_NAME_RE.is_match(name)
}
