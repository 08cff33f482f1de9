//! Query string tokenizer and value parsers.

use std::collections::BTreeSet;

use super::ParseWarning;
use crate::options::{Margins, RenderOptions};

/// Parse a query string into options + warnings.
pub(crate) fn parse_query(query: &str) -> (RenderOptions, Vec<ParseWarning>) {
    let mut opts = RenderOptions::default();
    let mut seen = BTreeSet::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        let Some(canonical) = canonical_key(&key) else {
            warnings.push(ParseWarning::KeyNotRecognized { key, value });
            continue;
        };
        if !seen.insert(canonical) {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(canonical),
                value: value.clone(),
            });
        }
        dispatch_key(canonical, &value, &mut opts, &mut warnings);
    }

    (opts, warnings)
}

/// Map accepted spellings to the option name used in warnings.
fn canonical_key(key: &str) -> Option<&'static str> {
    Some(match key {
        "bar_width" | "barwidth" => "bar_width",
        "bar_height" | "barheight" => "bar_height",
        "margin" => "margin",
        "margin_left" => "margin_left",
        "margin_right" => "margin_right",
        "margin_top" => "margin_top",
        "margin_bottom" => "margin_bottom",
        "background_color" | "bgcolor" => "background_color",
        "foreground_color" | "fgcolor" => "foreground_color",
        "show_text" => "show_text",
        "text_size" => "text_size",
        "text_margin" => "text_margin",
        _ => return None,
    })
}

fn dispatch_key(key: &'static str, value: &str, opts: &mut RenderOptions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "bar_width" => set_int(&mut opts.bar_width, key, value, warnings),
        "bar_height" => set_int(&mut opts.bar_height, key, value, warnings),
        "margin_left" => set_int(&mut opts.margins.left, key, value, warnings),
        "margin_right" => set_int(&mut opts.margins.right, key, value, warnings),
        "margin_top" => set_int(&mut opts.margins.top, key, value, warnings),
        "margin_bottom" => set_int(&mut opts.margins.bottom, key, value, warnings),
        "text_size" => set_int(&mut opts.text_size, key, value, warnings),
        "text_margin" => set_int(&mut opts.text_margin, key, value, warnings),
        "margin" => match parse_int(value) {
            Some(m) => opts.margins = Margins::uniform(m),
            None => warnings.push(invalid(key, value, "expected an integer")),
        },
        "background_color" => opts.background_color = String::from(value),
        "foreground_color" => opts.foreground_color = String::from(value),
        "show_text" => match parse_bool(value) {
            Some(b) => opts.show_text = b,
            None => warnings.push(invalid(key, value, "expected true|false|1|0|yes|no|on|off")),
        },
        _ => {}
    }
}

/// Set an integer field, warning (and keeping the old value) if unparseable.
fn set_int(field: &mut i64, key: &'static str, value: &str, warnings: &mut Vec<ParseWarning>) {
    match parse_int(value) {
        Some(v) => *field = v,
        None => warnings.push(invalid(key, value, "expected an integer")),
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ParseWarning {
    ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    }
}

// ---- Value parsers ----

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
///
/// Decoded bytes are reassembled as UTF-8; invalid sequences become U+FFFD.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_dimensions() {
        let (opts, warnings) = parse_query("bar_width=3&bar_height=80");
        assert_eq!(opts.bar_width, 3);
        assert_eq!(opts.bar_height, 80);
        assert!(warnings.is_empty());
    }

    #[test]
    fn aliases_and_case() {
        let (opts, warnings) = parse_query("BarWidth=4&BGCOLOR=red&fgcolor=white");
        assert_eq!(opts.bar_width, 4);
        assert_eq!(opts.background_color, "red");
        assert_eq!(opts.foreground_color, "white");
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn margins_individual_and_uniform() {
        let (opts, _) = parse_query("margin=4&margin_left=20&margin_bottom=-3");
        assert_eq!(opts.margins, Margins::new(20, 4, 4, -3));
    }

    #[test]
    fn show_text_bool_forms() {
        for (v, expected) in [("no", false), ("0", false), ("OFF", false), ("yes", true), ("1", true)] {
            let (opts, warnings) = parse_query(&format!("show_text={v}"));
            assert_eq!(opts.show_text, expected, "{v}");
            assert!(warnings.is_empty());
        }
    }

    #[test]
    fn invalid_values_keep_default() {
        let (opts, warnings) = parse_query("bar_width=wide&show_text=maybe&text_size=1.5");
        assert_eq!(opts, RenderOptions::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| matches!(w, ParseWarning::ValueInvalid { .. })));
        assert!(warnings.contains(&ParseWarning::ValueInvalid {
            key: "bar_width",
            value: String::from("wide"),
            reason: "expected an integer",
        }));
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_query("bar_width=3&foobar=baz");
        assert_eq!(
            warnings,
            [ParseWarning::KeyNotRecognized {
                key: String::from("foobar"),
                value: String::from("baz"),
            }]
        );
    }

    #[test]
    fn duplicate_key_warns_last_wins() {
        let (opts, warnings) = parse_query("bar_width=3&barwidth=5");
        assert_eq!(opts.bar_width, 5);
        assert!(matches!(
            warnings.as_slice(),
            [ParseWarning::DuplicateKey { key, .. }] if key == "bar_width"
        ));
    }

    #[test]
    fn percent_decoding_works() {
        let (opts, _) = parse_query("background_color=%23FF00FF&foreground_color=%23abc");
        assert_eq!(opts.background_color, "#FF00FF");
        assert_eq!(opts.foreground_color, "#abc");
        assert_eq!(percent_decode("a+b%20c"), "a b c");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%E2%82%AC"), "€");
    }

    #[test]
    fn leading_question_mark_stripped() {
        let (opts, warnings) = parse_query("?text_size=20&&text_margin=8");
        assert_eq!(opts.text_size, 20);
        assert_eq!(opts.text_margin, 8);
        assert!(warnings.is_empty());
    }

    #[test]
    fn colors_are_not_validated_here() {
        let (opts, warnings) = parse_query("background_color=notacolor");
        assert_eq!(opts.background_color, "notacolor");
        assert!(warnings.is_empty());
    }
}
