// src/hot/normalize.rs
//! Normalization rules shared by providers: magnitude scaling, URL templating,
//! label tables and text cleanup.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Render a raw magnitude the way Chinese boards do: 亿 (1e8) / 万 (1e4) / plain,
/// always with two decimals.
pub fn format_hot_value(num: f64) -> String {
    if num >= 1e8 {
        format!("{:.2}亿", num / 1e8)
    } else if num >= 1e4 {
        format!("{:.2}万", num / 1e4)
    } else {
        format!("{:.2}", num)
    }
}

/// Integer counts: scaled like [`format_hot_value`] from 1万 up, verbatim below.
pub fn format_hot_count(num: i64) -> String {
    if num >= 10_000 {
        format_hot_value(num as f64)
    } else {
        num.to_string()
    }
}

/// Replace every `{key}` placeholder in `pattern` with `value`.
pub fn fill_template(pattern: &str, key: &str, value: &str) -> String {
    pattern.replace(&format!("{{{key}}}"), value)
}

/// Build a canonical link from an item identifier, e.g. `https://x/item/{id}`.
pub fn synthesize_url(pattern: &str, id: &str) -> String {
    fill_template(pattern, "id", id)
}

/// Look up an upstream badge code; unknown codes map to an empty label.
pub fn map_label(table: &[(i64, &'static str)], code: i64) -> &'static str {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, l)| *l)
        .unwrap_or("")
}

/// Drop `suffix_len` trailing bytes (a fixed boilerplate tail), never splitting a char.
pub fn strip_tail(s: &str, suffix_len: usize) -> String {
    if s.len() <= suffix_len {
        return String::new();
    }
    let mut cut = s.len() - suffix_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s[..cut].trim_end().to_string()
}

/// Remove every whitespace/newline run entirely.
pub fn remove_whitespace(s: &str) -> String {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));
    re.replace_all(s, "").into_owned()
}

pub fn remove_char(s: &str, ch: char) -> String {
    s.chars().filter(|c| *c != ch).collect()
}

/// Parse a rank cell; blank or non-numeric text reads as 0.
pub fn parse_position(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
