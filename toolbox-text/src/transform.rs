//! Case transformation functions

use regex::{Captures, Regex};
use std::sync::LazyLock;

// A word character followed by the rest of its non-space run, so that
// punctuation stuck to a word ("world!") stays with it.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w\S*").expect("valid pattern"));

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("valid pattern"));

// A lowercase-to-uppercase hump, as in "camelCase".
static HUMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid pattern"));

/// Convert text to uppercase.
pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

/// Convert text to lowercase.
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// Uppercase the first letter of each word, lowercase the rest.
pub fn title_case(text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            }
            None => String::new(),
        }
    })
    .into_owned()
}

/// Join whitespace-delimited words lowercase-first with subsequent words
/// capitalized: "hello world" becomes "helloWorld".
pub fn camel_case(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            joined.extend(first.to_uppercase());
            joined.push_str(chars.as_str());
        }
    }

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Replace non-word runs with underscores, break camel humps, lowercase:
/// "helloWorld example" becomes "hello_world_example".
pub fn snake_case(text: &str) -> String {
    delimit(text, "_")
}

/// Replace non-word runs with hyphens, break camel humps, lowercase:
/// "helloWorld example" becomes "hello-world-example".
pub fn kebab_case(text: &str) -> String {
    delimit(text, "-")
}

fn delimit(text: &str, separator: &str) -> String {
    let replaced = NON_WORD.replace_all(text, separator);
    HUMP.replace_all(&replaced, |caps: &Captures| {
        format!("{}{}{}", &caps[1], separator, &caps[2])
    })
    .to_lowercase()
}
