use regex::Regex;
use scraper::ElementRef;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Collapses every whitespace run (nbsp and newlines included) to one space.
pub fn squash_whitespace(whitespace: &Regex, text: &str) -> String {
    whitespace.replace_all(text, " ").trim().to_string()
}
