//! Identifier sanitizing.

/// Turn an arbitrary string into a valid identifier.
///
/// Every character that is not an ASCII letter, digit or `_` becomes `_`,
/// runs of `_` collapse into one, and leading/trailing `_` are dropped.
/// A result starting with a digit gets a `_` prefix; an empty result is `_`.
///
/// # Examples
///
/// ```
/// use bindspec_core::make_id;
///
/// assert_eq!(make_id("std::vector<int>"), "std_vector_int");
/// assert_eq!(make_id("ns_Vec_int_int"), "ns_Vec_int_int");
/// ```
pub fn make_id(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let id = replaced
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    match id.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{id}"),
        Some(_) => id,
    }
}

/// Check whether `name` is already a valid identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
