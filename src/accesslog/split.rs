//! Bounded field splitting with missing-slot padding.
//!
//! Access log fields are positional: a CLF request line holds
//! `method asset protocol`, a Squid status field holds `code/status`.
//! [`split_fixed`] cuts one entry into a fixed number of slots so that a
//! batch of entries always produces rectangular columns, no matter how
//! mangled individual lines are.

/// Split `entry` on `separator` into exactly `max_splits + 1` slots.
///
/// The first `max_splits` separator occurrences each close a slot; once only
/// the final slot remains, the whole tail (further separators included) fills
/// it. Slots the input cannot fill are `None` — distinct from a field that is
/// present but empty, which is `Some("")`.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::split::split_fixed;
///
/// assert_eq!(
///     split_fixed("GET /index.html HTTP/1.1", " ", 2),
///     vec![
///         Some("GET".to_string()),
///         Some("/index.html".to_string()),
///         Some("HTTP/1.1".to_string()),
///     ],
/// );
///
/// // Short input pads with None, over-long input merges the tail
/// assert_eq!(
///     split_fixed("a b", " ", 2),
///     vec![Some("a".to_string()), Some("b".to_string()), None],
/// );
/// assert_eq!(
///     split_fixed("a b c d", " ", 2),
///     vec![Some("a".to_string()), Some("b".to_string()), Some("c d".to_string())],
/// );
///
/// // An empty entry still yields one present (empty) field
/// assert_eq!(split_fixed("", "/", 1), vec![Some(String::new()), None]);
/// ```
pub fn split_fixed(entry: &str, separator: &str, max_splits: usize) -> Vec<Option<String>> {
    let slots = max_splits + 1;
    let mut output: Vec<Option<String>> = Vec::with_capacity(slots);

    let mut start = 0;
    while output.len() + 1 < slots {
        match entry[start..].find(separator) {
            Some(pos) => {
                output.push(Some(entry[start..start + pos].to_string()));
                start += pos + separator.len();
            }
            None => break,
        }
    }

    // The remaining tail, separators included, fills the next slot.
    output.push(Some(entry[start..].to_string()));

    while output.len() < slots {
        output.push(None);
    }

    output
}
