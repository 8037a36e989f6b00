// src/core/entities.rs
// HTML entity decoding for API text fields.
// Covers decimal (&#039;), hex (&#x27;) and the full HTML5 named table (&eacute;).

use std::borrow::Cow;

/// Decode every entity in `s`. Borrows when there is nothing to decode.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }
    html_escape::decode_html_entities(s)
}

/// Decode each item and join with `sep`, preserving order.
pub fn decode_join<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 { out.push_str(sep); }
        out.push_str(&decode_entities(item.as_ref()));
    }
    out
}
