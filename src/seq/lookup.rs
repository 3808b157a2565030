use derive_more::Constructor;

/// A located element: its position in the source, and a reference into the source.
///
/// The reference borrows from the slice that was searched, so it cannot outlive it.
#[derive(Constructor, PartialEq, Eq, Debug)]
pub struct Found<'a, T> {
    pub index: usize,
    pub elem: &'a T,
}
impl<T> Clone for Found<'_, T> {
    /// [`Found`] is `Clone` regardless of whether `T` is `Clone`.
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Found<'_, T> {}
impl<T: Clone> Found<'_, T> {
    /// Detach from the source by copying the element.
    pub fn cloned(self) -> (usize, T) {
        (self.index, self.elem.clone())
    }
}

pub fn contains<T: PartialEq>(list: &[T], element: &T) -> bool {
    for s in list {
        if s == element {
            return true;
        }
    }
    false
}

/// The first position whose element equals `element`.
pub fn index_of<T: PartialEq>(list: &[T], element: &T) -> Option<usize> {
    find_index(list, |s, _| s == element)
}

/// The first element that satisfies `f`, along with its position.
///
/// `f` receives each element and its index, left to right, until it returns `true`.
pub fn find<T, F>(source: &[T], mut f: F) -> Option<Found<'_, T>>
where
    F: FnMut(&T, usize) -> bool,
{
    for (i, v) in source.iter().enumerate() {
        if f(v, i) {
            return Some(Found::new(i, v));
        }
    }
    None
}

pub fn find_index<T, F>(source: &[T], f: F) -> Option<usize>
where
    F: FnMut(&T, usize) -> bool,
{
    find(source, f).map(|found| found.index)
}
