use super::lookup::contains;
use core::hash::Hash;
use std::collections::HashSet;

/// Left fold.
///
/// `f` is called once per element, in order, with the value it returned for the previous element.
/// On the first call it receives `initial`. Returns `initial` as-is if `source` is empty.
///
/// Unlike the other callbacks in this module, `f` does not receive the index.
pub fn reduce<T, A, F>(source: &[T], mut f: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = initial;
    for v in source {
        acc = f(acc, v);
    }
    acc
}

/// A new sequence holding each distinct element once, in the order of first occurrence.
///
/// Membership is checked by a linear scan of the output so far, hence O(n^2).
/// See [`remove_duplicates_hashed()`] for larger inputs.
pub fn remove_duplicates<T: PartialEq + Clone>(list: &[T]) -> Vec<T> {
    let unique_list = reduce(
        list,
        |mut uniq: Vec<T>, s| {
            if !contains(&uniq, s) {
                uniq.push(s.clone());
            }
            uniq
        },
        Vec::new(),
    );
    log::trace!(
        "Dropped {} duplicate(s) out of {}",
        list.len() - unique_list.len(),
        list.len()
    );
    unique_list
}

/// Same output as [`remove_duplicates()`], in O(n) expected time.
pub fn remove_duplicates_hashed<T: Hash + Eq + Clone>(list: &[T]) -> Vec<T> {
    let mut seen = HashSet::<&T>::with_capacity(list.len());
    let mut unique_list = Vec::new();
    for s in list {
        if seen.insert(s) {
            unique_list.push(s.clone());
        }
    }
    log::trace!(
        "Dropped {} duplicate(s) out of {}",
        list.len() - unique_list.len(),
        list.len()
    );
    unique_list
}
