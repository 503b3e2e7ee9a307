//! Text manipulation utilities for identifiers found in API documentation.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a whole string is a valid identifier (`_` or XID start, then XID continue).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(is_word_character)
        }
        _ => false,
    }
}

/// Split a `CamelCase` (or `snake_case`) name into its words.
///
/// Acronym runs stay together: `HTTPRequest` becomes `["HTTP", "Request"]`.
/// Digits stick to the word before them: `Vector2Axis` becomes `["Vector2", "Axis"]`.
pub fn split_camel_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for piece in name.split('_').filter(|p| !p.is_empty()) {
        let chars: Vec<(usize, char)> = piece.char_indices().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (idx, c) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, n)| n);

            let lower_to_upper = c.is_uppercase() && (prev.is_lowercase() || prev.is_ascii_digit());
            let acronym_end = c.is_uppercase()
                && prev.is_uppercase()
                && next.is_some_and(|n| n.is_lowercase());

            if lower_to_upper || acronym_end {
                words.push(&piece[start..idx]);
                start = idx;
            }
        }
        words.push(&piece[start..]);
    }

    words
}

/// Convert `snake_case` or `SCREAMING_SNAKE` to `lowerCamelCase`.
///
/// Leading underscores survive (`_get_property_list` becomes `_getPropertyList`).
/// Pieces that are entirely uppercase are folded to lowercase first, so
/// `TOP_LEFT` becomes `topLeft`.
pub fn snake_to_camel(name: &str) -> String {
    let body = name.trim_start_matches('_');
    let mut out = String::with_capacity(name.len());
    out.push_str(&name[..name.len() - body.len()]);

    let mut first = true;
    for piece in body.split('_').filter(|p| !p.is_empty()) {
        let shouting = piece.chars().any(char::is_alphabetic)
            && !piece.chars().any(char::is_lowercase);
        let mut chars = piece.chars();
        let Some(head) = chars.next() else { continue };

        if first {
            out.extend(head.to_lowercase());
        } else {
            out.extend(head.to_uppercase());
        }
        if shouting {
            out.extend(chars.flat_map(char::to_lowercase));
        } else {
            out.push_str(chars.as_str());
        }
        first = false;
    }

    out
}

/// Drop the leading words of an enum value that repeat the enum's own name.
///
/// `MouseButton` / `MOUSE_BUTTON_LEFT` yields `LEFT`. Only the last dotted
/// segment of the enum name counts, so `Variant.Type` / `TYPE_NIL` yields `NIL`.
///
/// The final word is never dropped, and if the remainder would start with a
/// digit one more word is kept (`Key` / `KEY_0` yields `KEY_0`).
pub fn drop_matching_prefix<'a>(enum_name: &str, value: &'a str) -> &'a str {
    let host = enum_name.rsplit('.').next().unwrap_or(enum_name);
    let enum_words = split_camel_words(host);

    let mut cut = 0;
    let mut prev_cut = 0;
    for word in enum_words {
        let Some((piece, _)) = value[cut..].split_once('_') else {
            break;
        };
        if !piece.eq_ignore_ascii_case(word) {
            break;
        }
        prev_cut = cut;
        cut += piece.len() + 1;
    }

    if value[cut..].starts_with(|c: char| c.is_ascii_digit()) {
        cut = prev_cut;
    }
    &value[cut..]
}
