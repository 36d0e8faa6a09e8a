//! Read-only derivations over record sequences.
//!
//! These work on any iterator so they compose with filtered views: totals
//! can be computed over "this month's expenses" without copying records.

use std::ops::Add;

/// Ordered key -> members mapping produced by [`group_by`].
pub type Groups<K, T> = Vec<(K, Vec<T>)>;

/// Partitions `items` by `key_fn`.
///
/// Keys appear in first-seen order and members keep their source order.
pub fn group_by<I, K, F>(items: I, key_fn: F) -> Groups<K, I::Item>
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    group_by_with_keys(Vec::new(), items, key_fn)
}

/// Like [`group_by`], but every key in `seed_keys` is present (in that order)
/// even when no item maps to it. Unseeded keys are appended after them.
pub fn group_by_with_keys<I, K, F>(seed_keys: Vec<K>, items: I, mut key_fn: F) -> Groups<K, I::Item>
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: Groups<K, I::Item> = seed_keys.into_iter().map(|key| (key, Vec::new())).collect();
    for item in items {
        let key = key_fn(&item);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// Sums `value_fn` per `key_fn` group, keys in first-seen order.
pub fn aggregate<I, K, V, F, G>(items: I, mut value_fn: F, mut key_fn: G) -> Vec<(K, V)>
where
    I: IntoIterator,
    K: PartialEq,
    V: Add<Output = V> + Default + Copy,
    F: FnMut(&I::Item) -> V,
    G: FnMut(&I::Item) -> K,
{
    let mut totals: Vec<(K, V)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        let value = value_fn(&item);
        match totals.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, total)) => *total = *total + value,
            None => totals.push((key, V::default() + value)),
        }
    }
    totals
}

/// Sums `value_fn` over every item.
pub fn total<I, V, F>(items: I, mut value_fn: F) -> V
where
    I: IntoIterator,
    V: Add<Output = V> + Default,
    F: FnMut(&I::Item) -> V,
{
    items
        .into_iter()
        .fold(V::default(), |acc, item| acc + value_fn(&item))
}

/// Case-insensitive substring match; an empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::{aggregate, contains_ignore_case, group_by, group_by_with_keys, total};

    #[test]
    fn group_by_keeps_first_seen_key_order_and_member_order() {
        let words = ["apple", "bean", "avocado", "beet", "cherry"];
        let groups = group_by(words, |word| word.chars().next().unwrap_or(' '));
        assert_eq!(
            groups,
            vec![
                ('a', vec!["apple", "avocado"]),
                ('b', vec!["bean", "beet"]),
                ('c', vec!["cherry"]),
            ]
        );
    }

    #[test]
    fn seeded_keys_survive_without_members() {
        let groups = group_by_with_keys(vec![1, 2, 3], [3, 3, 5], |value| *value);
        assert_eq!(
            groups,
            vec![(1, vec![]), (2, vec![]), (3, vec![3, 3]), (5, vec![5])]
        );
    }

    #[test]
    fn aggregate_and_total_sum_values() {
        let rows = [("a", 2), ("b", 5), ("a", 3)];
        assert_eq!(
            aggregate(rows, |row| row.1, |row| row.0),
            vec![("a", 5), ("b", 5)]
        );
        assert_eq!(total(rows, |row| row.1), 10);
        assert_eq!(total(Vec::<(&str, i32)>::new(), |row| row.1), 0);
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case("Paper Towels", "TOW"));
        assert!(contains_ignore_case("Paper Towels", ""));
        assert!(!contains_ignore_case("Paper Towels", "soap"));
    }
}
