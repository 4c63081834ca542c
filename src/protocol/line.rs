//! Line framing for the shell

/// Prompt printed before each read
pub const PROMPT: &str = "wkn> ";

/// Split a shell line into whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
