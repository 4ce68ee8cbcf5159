//! Split/join helpers for compound string fields.
//!
//! The backend stores the full name ("first last") and the address
//! ("line1 line2") as single strings. Editing splits them at the first
//! space; submitting joins them back with a single space. The round trip
//! is only guaranteed for inputs containing a space: a value with no
//! space at all gains a trailing separator on the way back. This is the
//! stored format's limitation, kept as-is.

/// Splits a compound field at the first space.
///
/// Without a space the whole input becomes the first part and the second
/// part is empty.
fn split_at_first_space(full: &str) -> (String, String) {
    match full.split_once(' ') {
        Some((head, rest)) => (head.to_string(), rest.to_string()),
        None => (full.to_string(), String::new()),
    }
}

fn join_with_space(first: &str, second: &str) -> String {
    format!("{first} {second}")
}

/// Splits a stored full name into (first, last).
#[must_use]
pub fn split_full_name(full: &str) -> (String, String) {
    split_at_first_space(full)
}

/// Joins first and last name into the stored form.
#[must_use]
pub fn join_full_name(first: &str, last: &str) -> String {
    join_with_space(first, last)
}

/// Splits a stored address into (line1, line2).
#[must_use]
pub fn split_address(full: &str) -> (String, String) {
    split_at_first_space(full)
}

/// Joins both address lines into the stored form.
#[must_use]
pub fn join_address(line1: &str, line2: &str) -> String {
    join_with_space(line1, line2)
}
