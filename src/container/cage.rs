use super::{ReadView, WriteView};
use crate::core::*;
use log::*;

/// A vec backed container of elements of exactly type `T`.
///
/// Invariant in `T`: a `Cage<u32>` is not a `Cage<u64>` even though every
/// `u32` converts into a `u64`. Elements of other types can only be taken
/// through a [`ReadView`], which is a [`Producer`] and so covariant.
///
/// ```compile_fail,E0308
/// use cage::container::Cage;
///
/// let narrow = Cage::<u32>::from(vec![1]);
/// let mut wide = Cage::<u64>::new();
/// wide.transfer_from(&narrow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cage<T> {
    elements: Vec<T>,
}

impl<T> Cage<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// First element in insertion order.
    pub fn first(&self) -> Result<&T> {
        match self.elements.first() {
            Some(element) => Ok(element),
            None => {
                debug!("First element requested from empty {}", Self::name());
                Err(ContainerError::empty::<T>())
            }
        }
    }

    /// Appends item to the end.
    pub fn put(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Appends clones of all elements of the source, in order.
    /// Source stays as is.
    pub fn transfer_from(&mut self, source: &Cage<T>)
    where
        T: Clone,
    {
        trace!(
            "Transferring {} elements into {} holding {}",
            source.len(),
            Self::name(),
            self.len()
        );
        self.elements.extend_from_slice(&source.elements);
    }

    /// Appends all elements the producer yields, in order.
    ///
    /// Accepts a [`ReadView`] of a cage of any type that converts into `T`.
    pub fn transfer_from_view<P: Producer<T>>(&mut self, source: P) {
        trace!(
            "Transferring {} produced elements into {} holding {}",
            source.len(),
            Self::name(),
            self.len()
        );
        self.elements.extend(source.items());
    }

    /// Puts clones of all elements into the consumer, in order.
    ///
    /// Accepts a [`WriteView`] of a cage of any type that `T` converts into.
    pub fn transfer_into<C: Consumer<T>>(&self, mut dest: C)
    where
        T: Clone,
    {
        trace!("Transferring {} elements out of {}", self.len(), Self::name());
        for element in self.elements.iter().cloned() {
            dest.put(element);
        }
    }

    /// Producer only view. Nothing can be written through it.
    pub fn read(&self) -> ReadView<'_, T> {
        ReadView::new(self)
    }

    /// Consumer only view. Nothing can be read through it.
    pub fn write(&mut self) -> WriteView<'_, T> {
        WriteView::new(self)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn name() -> String {
        format!("Cage<{}>", TypeInfo::of::<T>().short_name())
    }
}

impl<T> Default for Cage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Producer<T> for Cage<T> {
    type Items<'a> = std::iter::Cloned<std::slice::Iter<'a, T>> where Self: 'a;

    fn first(&self) -> Result<T> {
        Cage::first(self).cloned()
    }

    fn items(&self) -> Self::Items<'_> {
        self.elements.iter().cloned()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Consumer<T> for Cage<T> {
    fn put(&mut self, item: T) {
        Cage::put(self, item)
    }
}

impl<T> From<Vec<T>> for Cage<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Cage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Cage<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter)
    }
}

impl<T> IntoIterator for Cage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Cage<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
