/// ASCII punctuation trimmed from token edges before keyword lookup.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Strips leading and trailing punctuation, keeping internal punctuation
/// (hyphens inside a word survive, so "mind-blowing" stays matchable).
pub(crate) fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c| PUNCTUATION.contains(c))
}

/// Removes URL-like runs from `text`: anything from a literal `http` or
/// `www.` up to (not including) the next whitespace. Surrounding whitespace
/// is left in place; the caller tokenizes on whitespace afterwards.
pub(crate) fn strip_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = find_url_start(rest) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        rest = match tail.find(char::is_whitespace) {
            Some(end) => &tail[end..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}

fn find_url_start(text: &str) -> Option<usize> {
    match (text.find("http"), text.find("www.")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
