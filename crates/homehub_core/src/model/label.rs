//! Closed enum tables and display labels.
//!
//! Label lookup on raw keys is a total function: known keys map to their
//! table label, anything else is title-cased (first character upper-cased,
//! rest untouched).

/// A fixed, closed set of values with stable keys and display labels.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Every member in display order.
    const ALL: &'static [Self];

    /// Stable lowercase key used on the wire and in filters.
    fn key(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Exact key match; no case folding.
    fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.key() == raw)
    }
}

/// Returns the table label for `raw`, or its title-cased fallback.
pub fn label_for_key<T: ClosedSet>(raw: &str) -> String {
    match T::from_key(raw) {
        Some(member) => member.label().to_string(),
        None => title_case(raw),
    }
}

/// Upper-cases the first character and keeps the remainder as-is.
pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
