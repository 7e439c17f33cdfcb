//! Shared identity normalization for product names.
//!
//! The aggregator, the learning store, and the ranking engine must all agree
//! on what counts as "the same name", so the rule lives in one place:
//! lowercase, fold Latin diacritics to ASCII, collapse runs of whitespace.

/// Normalize a product name into its identity form.
///
/// Idempotent: `normalize_name(normalize_name(s)) == normalize_name(s)`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in ch.to_lowercase() {
            match fold_diacritic(lower) {
                Some(folded) => out.push_str(folded),
                None => out.push(lower),
            }
        }
    }

    out
}

/// ASCII fold for the Latin diacritics that show up in grocery names.
/// Anything not listed passes through unchanged.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => "a",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => "o",
        'ú' | 'ù' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ñ' => "n",
        'ç' => "c",
        'ß' => "ss",
        'æ' => "ae",
        'ø' => "o",
        _ => return None,
    };
    Some(folded)
}
