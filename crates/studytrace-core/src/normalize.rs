//! Markup-to-plain-text content normalizer.
//!
//! Raw element content arrives as rich markup; comparison and diffing need a
//! stable plain-text form. `normalize` applies a fixed, documented policy:
//!
//! 1. Character entities (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;` `&#39;`
//!    `&nbsp;` and decimal `&#NN;`) are decoded repeatedly until none remain,
//!    so doubly-escaped input fully unescapes in one call.
//! 2. Markup tags - `<` followed by a letter, `/`, `!` or `?` up to the
//!    matching `>`, and `<!--` comments up to `-->` - are replaced by a
//!    single space. An unterminated tag is kept verbatim.
//! 3. Whitespace runs collapse to a single space and the ends are trimmed.
//!
//! Entities are decoded before tags are stripped, so markup that was escaped
//! into entities is treated as markup. That trade keeps the function
//! idempotent: `normalize(normalize(x)) == normalize(x)` for every input.
//!
//! Empty input yields empty output; the function never fails.

/// Normalize raw markup to plain text. Pure and deterministic.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let decoded = decode_entities(raw);
    let stripped = strip_tags(&decoded);
    collapse_whitespace(&stripped)
}

/// Decode supported character entities until none remain.
///
/// Every decode strictly shortens the string, so the loop terminates.
fn decode_entities(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let (next, changed) = decode_entities_once(&current);
        if !changed {
            return next;
        }
        current = next;
    }
}

fn decode_entities_once(input: &str) -> (String, bool) {
    const NAMED: &[(&str, char)] = &[
        ("amp;", '&'),
        ("lt;", '<'),
        ("gt;", '>'),
        ("quot;", '"'),
        ("apos;", '\''),
        ("#39;", '\''),
        ("nbsp;", ' '),
    ];

    let mut out = String::with_capacity(input.len());
    let mut changed = false;
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        if let Some((entity, replacement)) = NAMED
            .iter()
            .find(|(name, _)| rest.starts_with(name))
            .copied()
        {
            out.push(replacement);
            rest = &rest[entity.len()..];
            changed = true;
        } else if let Some((ch, consumed)) = decode_decimal(rest) {
            out.push(ch);
            rest = &rest[consumed..];
            changed = true;
        } else {
            out.push('&');
        }
    }
    out.push_str(rest);
    (out, changed)
}

/// Decode a decimal reference body (`#NN;` after the `&`), if present.
fn decode_decimal(rest: &str) -> Option<(char, usize)> {
    let digits = rest.strip_prefix('#')?;
    let end = digits.find(';')?;
    if end == 0 || end > 7 {
        return None;
    }
    let code: u32 = digits[..end].parse().ok()?;
    let ch = char::from_u32(code)?;
    // consumed: '#' + digits + ';'
    Some((ch, end + 2))
}

/// Replace well-formed tags and comments with a single space.
///
/// The replacement is always a space, never nothing: removing a tag must not
/// splice its neighbours into a new token, entity, or tag.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let after = &rest[1..];
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?');

        if !opens_tag {
            out.push('<');
            rest = after;
            continue;
        }

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(end) => {
                    out.push(' ');
                    rest = &rest[end + 3..];
                }
                None => {
                    // Unterminated comment: keep verbatim
                    out.push_str(rest);
                    rest = "";
                }
            }
        } else {
            match rest.find('>') {
                Some(end) => {
                    out.push(' ');
                    rest = &rest[end + 1..];
                }
                None => {
                    // Unterminated tag: keep verbatim
                    out.push_str(rest);
                    rest = "";
                }
            }
        }
    }
    out.push_str(rest);
    out
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
