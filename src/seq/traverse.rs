/// Shallow-copies the elements for which `f(elem, index)` holds, preserving order.
pub fn filter<T, F>(source: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    let mut filtered = Vec::new();
    for (i, v) in source.iter().enumerate() {
        if f(v, i) {
            filtered.push(v.clone());
        }
    }
    filtered
}

/// The output has the same length as `source`; the `i`th output is `f(&source[i], i)`.
pub fn map<T, U, F>(source: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut mapped = Vec::with_capacity(source.len());
    for (i, v) in source.iter().enumerate() {
        mapped.push(f(v, i));
    }
    mapped
}

pub fn for_each<T, F>(source: &[T], mut f: F)
where
    F: FnMut(&T, usize),
{
    for (i, v) in source.iter().enumerate() {
        f(v, i);
    }
}

/// Like [`for_each()`], except that `f` may write to each element in place.
pub fn for_each_mut<T, F>(source: &mut [T], mut f: F)
where
    F: FnMut(&mut T, usize),
{
    for (i, v) in source.iter_mut().enumerate() {
        f(v, i);
    }
}

/// Stops at the first element failing `f`. Vacuously `true` on an empty `source`.
pub fn every<T, F>(source: &[T], mut f: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    for (i, v) in source.iter().enumerate() {
        if !f(v, i) {
            return false;
        }
    }
    true
}

/// Stops at the first element passing `f`. `false` on an empty `source`.
pub fn some<T, F>(source: &[T], mut f: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    for (i, v) in source.iter().enumerate() {
        if f(v, i) {
            return true;
        }
    }
    false
}
