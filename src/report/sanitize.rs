//! Metric name normalization into the wire-safe charset.

/// Replace every character outside `[A-Za-z0-9_.~-]` with `_`.
///
/// Pure and total; character count and positions are preserved, and the
/// result is a fixed point (sanitizing twice changes nothing). Output is
/// only ever used as a JSON object key through a proper encoder, so no
/// further escaping is needed.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '.' | '~' | '-' => c,
            _ => '_',
        })
        .collect()
}
