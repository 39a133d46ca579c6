//! Alternative-text expansion for `[opt1/opt2/...]` groups.
//!
//! Groups are resolved one at a time, always starting from the leftmost
//! `[`. A group ends at the first `]` after its `[`, so nested brackets are
//! not treated as nesting: `[a/[b/c]]` closes at the inner `]`. An opening
//! bracket with no closing bracket after it stops expansion and the rest of
//! the text is kept verbatim.

use rand::seq::SliceRandom;
use rand::Rng;

const GROUP_OPEN: char = '[';
const GROUP_CLOSE: char = ']';
const OPTION_SEPARATOR: char = '/';

/// Resolve every alternative-text group in `text` with options drawn from `rng`.
pub fn expand_variants<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut buffer = text.to_string();

    while let Some(start) = buffer.find(GROUP_OPEN) {
        let Some(offset) = buffer[start..].find(GROUP_CLOSE) else {
            break;
        };
        let end = start + offset;

        let options: Vec<&str> = buffer[start + 1..end].split(OPTION_SEPARATOR).collect();
        let choice = options.choose(rng).copied().unwrap_or_default();

        let mut next = String::with_capacity(buffer.len());
        next.push_str(&buffer[..start]);
        next.push_str(choice);
        next.push_str(&buffer[end + 1..]);
        buffer = next;
    }

    buffer
}
