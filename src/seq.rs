//! Higher-order operations over in-memory ordered sequences.
//!
//! + Every operation borrows the source as a slice and traverses it once, left to right.
//! + Callbacks receive `(element, index)`, except [`reduce()`]'s, which receives `(accumulator, element)`.
//! + Nothing here fails. An absent result is `None`, never a sentinel index.
//!
//! Each free function is also available as a method on slices, via [`SeqOps`].

mod fold;
mod lookup;
mod traverse;


pub use self::fold::*;
pub use self::lookup::*;
pub use self::traverse::*;
use core::hash::Hash;

/// Method-call syntax for the free functions of this mod.
///
/// Implemented for `[T]`, hence usable on `Vec<T>` and arrays too.
/// On arrays, the inherent `<[T; N]>::map()` shadows [`SeqOps::map()`]; call it on `arr[..]`.
pub trait SeqOps<T> {
    fn contains_elem(&self, element: &T) -> bool
    where
        T: PartialEq;
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq;
    fn remove_duplicates(&self) -> Vec<T>
    where
        T: PartialEq + Clone;
    fn remove_duplicates_hashed(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone;
    fn reduce<A>(&self, f: impl FnMut(A, &T) -> A, initial: A) -> A;
    fn filter(&self, f: impl FnMut(&T, usize) -> bool) -> Vec<T>
    where
        T: Clone;
    fn map<U>(&self, f: impl FnMut(&T, usize) -> U) -> Vec<U>;
    fn for_each(&self, f: impl FnMut(&T, usize));
    fn for_each_mut(&mut self, f: impl FnMut(&mut T, usize));
    fn every(&self, f: impl FnMut(&T, usize) -> bool) -> bool;
    fn some(&self, f: impl FnMut(&T, usize) -> bool) -> bool;
    fn find(&self, f: impl FnMut(&T, usize) -> bool) -> Option<Found<'_, T>>;
    fn find_index(&self, f: impl FnMut(&T, usize) -> bool) -> Option<usize>;
}
impl<T> SeqOps<T> for [T] {
    /* Named apart from the inherent `<[T]>::contains()`, which would otherwise shadow this method. */
    fn contains_elem(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        contains(self, element)
    }
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        index_of(self, element)
    }
    fn remove_duplicates(&self) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        remove_duplicates(self)
    }
    fn remove_duplicates_hashed(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone,
    {
        remove_duplicates_hashed(self)
    }
    fn reduce<A>(&self, f: impl FnMut(A, &T) -> A, initial: A) -> A {
        reduce(self, f, initial)
    }
    fn filter(&self, f: impl FnMut(&T, usize) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        filter(self, f)
    }
    fn map<U>(&self, f: impl FnMut(&T, usize) -> U) -> Vec<U> {
        map(self, f)
    }
    fn for_each(&self, f: impl FnMut(&T, usize)) {
        for_each(self, f)
    }
    fn for_each_mut(&mut self, f: impl FnMut(&mut T, usize)) {
        for_each_mut(self, f)
    }
    fn every(&self, f: impl FnMut(&T, usize) -> bool) -> bool {
        every(self, f)
    }
    fn some(&self, f: impl FnMut(&T, usize) -> bool) -> bool {
        some(self, f)
    }
    fn find(&self, f: impl FnMut(&T, usize) -> bool) -> Option<Found<'_, T>> {
        find(self, f)
    }
    fn find_index(&self, f: impl FnMut(&T, usize) -> bool) -> Option<usize> {
        find_index(self, f)
    }
}
