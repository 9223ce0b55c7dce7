//! Edge-case coverage for secret protections and document handling.
//!
//! These tests focus on behavior across Unicode scalar values (multi-byte
//! characters and combining marks), empty values and replacements, and
//! documents whose shape is unusual rather than whose content is.

use redacting::{Inquiry, Protection, Secret, SecretChain};
use serde_json::{json, Value};

fn secret(pattern: &str, protection: Protection, replacement: &str) -> Secret {
    Secret::new(pattern, protection, replacement).unwrap()
}

fn redact_str(secret: &Secret, data: &str) -> String {
    String::from_utf8(secret.redact(data.as_bytes()).into_owned()).unwrap()
}

#[test]
fn test_black_out_counts_characters() {
    let secret = secret("café", Protection::BlackOut, "#");
    assert_eq!(redact_str(&secret, "café"), "####");
    assert_eq!("café".len(), 5);
}

#[test]
fn test_black_out_multibyte() {
    // Chinese characters (3 bytes each in UTF-8)
    let secret = secret("秘密", Protection::BlackOut, "*");
    assert_eq!(redact_str(&secret, "秘密数据"), "**数据");
}

#[test]
fn test_black_out_emoji_with_multibyte_replacement() {
    let secret = secret("🔒+", Protection::BlackOut, "█");
    assert_eq!(redact_str(&secret, "lock🔒🔒data"), "lock██data");
}

#[test]
fn test_black_out_combining_characters() {
    // "é" as combining character (e + ◌́) is two scalar values
    let secret = secret("cafe\u{0301}", Protection::BlackOut, "#");
    assert_eq!(redact_str(&secret, "cafe\u{0301}!"), "#####!");
}

#[test]
fn test_black_out_multi_character_replacement() {
    let secret = secret("abc", Protection::BlackOut, "<>");
    assert_eq!(redact_str(&secret, "xabcx"), "x<><><>x");
}

#[test]
fn test_censor_ignores_match_length() {
    let secret = secret("[0-9]+", Protection::Censor, "█");
    assert_eq!(redact_str(&secret, "1 22 333"), "█ █ █");
}

#[test]
fn test_omit_with_empty_replacement_empties_value() {
    let secret = secret("x", Protection::Omit, "");
    assert_eq!(redact_str(&secret, "a value with x"), "");
}

#[test]
fn test_pattern_matching_empty_string() {
    // Empty matches are replaced with zero characters' worth of mask
    let secret = secret("z*", Protection::BlackOut, "#");
    assert_eq!(redact_str(&secret, "azzb"), "a##b");
}

#[test]
fn test_redaction_is_deterministic() {
    let secret = secret("s[a-z]+t", Protection::BlackOut, "#");
    let once = redact_str(&secret, "a secret and a sort");
    let again = redact_str(&secret, "a secret and a sort");
    assert_eq!(once, again);
    assert_eq!(once, "a ###### and a ####");
}

#[test]
fn test_chain_stays_empty_after_omit() {
    let chain: SecretChain = [
        secret("gone", Protection::Omit, ""),
        secret("^$", Protection::Censor, "back"),
        secret("", Protection::Omit, "back"),
    ]
    .into_iter()
    .collect();
    assert!(chain.apply(b"this is gone").is_empty());
}

#[test]
fn test_empty_string_leaf_is_kept() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_value(secret("", Protection::Omit, "filled"));
    let redacted = inquiry.redact(br#"{"a":"","b":"x"}"#).unwrap();
    assert_eq!(redacted, br#"{"a":"","b":"filled"}"#);
}

#[test]
fn test_omitted_leaf_stays_as_empty_string() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_value(secret("secret", Protection::Omit, ""));
    let redacted = inquiry.redact(br#"{"a":"secret","b":["secret",1]}"#).unwrap();
    assert_eq!(redacted, br#"{"a":"","b":["",1]}"#);
}

#[test]
fn test_unicode_strings_round_trip() {
    let inquiry = Inquiry::new();
    let redacted = inquiry
        .redact("{\"k\":\"سرية 秘密 🔒 \\u00e9\"}".as_bytes())
        .unwrap();
    let value: Value = serde_json::from_slice(&redacted).unwrap();
    assert_eq!(value, json!({"k": "سرية 秘密 🔒 é"}));
}

#[test]
fn test_escaped_characters_are_matched_decoded() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_value(secret("\"quoted\"", Protection::Censor, "[Q]"));
    let redacted = inquiry.redact(br#"["say \"quoted\" now"]"#).unwrap();
    assert_eq!(redacted, br#"["say [Q] now"]"#);
}

#[test]
fn test_secret_field_holding_nested_structure() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_field("^credentials$").unwrap();
    let redacted = inquiry
        .redact(br#"{"credentials":{"user":"u","tokens":[1,2]},"ok":[{"credentials":null}]}"#)
        .unwrap();
    assert_eq!(redacted, br#"{"ok":[{}]}"#);
}

#[test]
fn test_deep_mixed_nesting_is_redacted() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_value(secret("secret", Protection::Censor, "#"));
    let data = br#"[{"l1":[{"l2":{"l3":[{"l4":{"l5":["secret"],"s":"secret"}}],"s":"secret"}}],"s":"secret"}]"#;
    let redacted = inquiry.redact(data).unwrap();
    let value: Value = serde_json::from_slice(&redacted).unwrap();
    assert_eq!(
        value,
        json!([{"l1": [{"l2": {"l3": [{"l4": {"l5": ["#"], "s": "#"}}], "s": "#"}}], "s": "#"}])
    );
}

#[test]
fn test_whitespace_only_payload_is_text() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_value(secret(" ", Protection::BlackOut, "_"));
    assert_eq!(inquiry.redact(b"   ").unwrap(), b"___");
}

#[test]
fn test_very_long_value() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_value(secret("x+", Protection::BlackOut, "*"));
    let long = "x".repeat(100_000);
    let redacted = inquiry.redact(long.as_bytes()).unwrap();
    assert_eq!(redacted.len(), 100_000);
    assert!(redacted.iter().all(|&byte| byte == b'*'));
}

#[test]
fn test_secret_field_nested_past_130_levels() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_field("password").unwrap();
    let depth = 130;
    let data = format!(
        "{}{{\"password\":\"hunter2\"}}{}",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let redacted = inquiry.redact(data.as_bytes()).unwrap();
    let expected = format!("{}{{}}{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(String::from_utf8(redacted).unwrap(), expected);
}

#[test]
fn test_invalid_utf8_in_string_value_still_walks_document() {
    let mut inquiry = Inquiry::new();
    inquiry.add_secret_field("password").unwrap();
    inquiry.add_secret_value(secret("note", Protection::Censor, "[N]"));
    let redacted = inquiry
        .redact(b"{\"password\":\"hunter2\",\"note\":\"a note \xff\"}")
        .unwrap();
    let value: Value = serde_json::from_slice(&redacted).unwrap();
    assert_eq!(value, json!({"note": "a [N] \u{fffd}"}));
}
