//! Integer sequences: the only value type of the store

use super::error::ParseError;

/// Ordered list of integers bound to a key
pub type Sequence = Vec<i64>;

/// Parse a comma-separated list of decimal integers
///
/// The first malformed element aborts the whole parse: `1,x,2` is an error,
/// never `[1, 2]`. Empty elements (`1,,2`, trailing comma) are malformed too.
pub fn parse_sequence(input: &str) -> Result<Sequence, ParseError> {
    input
        .split(',')
        .map(|token| {
            token.parse::<i64>().map_err(|source| ParseError {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Render a sequence for display, e.g. `[3 1 2]`
pub fn render(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(" "))
}
