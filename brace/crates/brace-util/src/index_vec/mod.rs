//! IndexVec - a vector addressed by a typed index.
//!
//! Token streams and scope stacks both hold positions into the same
//! buffer; giving those positions their own type keeps them from being
//! confused with byte offsets or counts.
//!
//! In-place edits ([`IndexVec::replace`], [`IndexVec::remove`],
//! [`IndexVec::truncate`]) are bounds-checked and report
//! [`IndexVecError::OutOfBounds`] instead of panicking, because callers
//! that rewrite earlier entries (the lexer does) want a recoverable error
//! when their own bookkeeping is wrong.
//!
//! ```
//! use brace_util::{define_idx, IndexVec};
//!
//! define_idx!(ExprId);
//!
//! let mut exprs: IndexVec<ExprId, i32> = IndexVec::new();
//! let id = exprs.push(42);
//! assert_eq!(exprs.replace(id, 7), Ok(42));
//! assert_eq!(exprs[id], 7);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::error::{IndexVecError, IndexVecResult};

/// Types usable as an [`IndexVec`] index.
pub trait Idx: Copy + Eq {
    fn from_usize(idx: usize) -> Self;

    fn index(self) -> usize;
}

impl Idx for usize {
    #[inline]
    fn from_usize(idx: usize) -> Self {
        idx
    }

    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// A `Vec<T>` indexed by `I`.
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn from_raw(raw: Vec<T>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    #[inline]
    pub fn into_raw(self) -> Vec<T> {
        self.raw
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    fn check(&self, index: usize) -> IndexVecResult<()> {
        if index < self.raw.len() {
            Ok(())
        } else {
            Err(IndexVecError::OutOfBounds {
                index,
                length: self.raw.len(),
            })
        }
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Appends `value` and returns its index.
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let index = self.raw.len();
        self.raw.push(value);
        I::from_usize(index)
    }

    #[inline]
    pub fn pop(&mut self) -> Option<(I, T)> {
        let value = self.raw.pop()?;
        Some((I::from_usize(self.raw.len()), value))
    }

    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }

    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        self.raw.get_mut(index.index())
    }

    /// Index of the last element.
    #[inline]
    pub fn last_idx(&self) -> Option<I> {
        self.raw.len().checked_sub(1).map(I::from_usize)
    }

    /// Overwrites the element at `index`, returning the old value.
    pub fn replace(&mut self, index: I, value: T) -> IndexVecResult<T> {
        let i = index.index();
        self.check(i)?;
        Ok(std::mem::replace(&mut self.raw[i], value))
    }

    /// Removes the element at `index`, shifting later elements down by one.
    pub fn remove(&mut self, index: I) -> IndexVecResult<T> {
        let i = index.index();
        self.check(i)?;
        Ok(self.raw.remove(i))
    }

    /// Shortens the vector to `len` elements. Growing is an error.
    pub fn truncate(&mut self, len: usize) -> IndexVecResult<()> {
        if len > self.raw.len() {
            return Err(IndexVecError::OutOfBounds {
                index: len,
                length: self.raw.len(),
            });
        }
        self.raw.truncate(len);
        Ok(())
    }

    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.raw
            .iter()
            .enumerate()
            .map(|(i, v)| (I::from_usize(i), v))
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: Clone> Clone for IndexVec<I, T> {
    fn clone(&self) -> Self {
        Self::from_raw(self.raw.clone())
    }
}

impl<I, T: PartialEq> PartialEq for IndexVec<I, T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<I, T: Eq> Eq for IndexVec<I, T> {}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl<I, T> FromIterator<T> for IndexVec<I, T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_raw(iter.into_iter().collect())
    }
}

impl<I, T> IntoIterator for IndexVec<I, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.into_iter()
    }
}

impl<'a, I, T> IntoIterator for &'a IndexVec<I, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.iter()
    }
}

/// Declares a `u32`-backed index type implementing [`Idx`].
///
/// Indices past `u32::MAX` saturate; no token buffer gets that large.
#[macro_export]
macro_rules! define_idx {
    ($(#[$attr:meta])* $vis:vis $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(pub u32);

        impl $crate::index_vec::Idx for $name {
            #[inline]
            fn from_usize(idx: usize) -> Self {
                $name(u32::try_from(idx).unwrap_or(u32::MAX))
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

#[cfg(test)]
mod tests;
