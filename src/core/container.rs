use super::Result;

/// Read-only capability over elements of type `T`.
///
/// Nothing can be written through a producer, so an implementor over elements
/// of some `S` may produce any `T` that `S` converts into. That is what makes
/// producers safe to treat covariantly.
pub trait Producer<T> {
    type Items<'a>: Iterator<Item = T>
    where
        Self: 'a;

    /// First element in insertion order.
    /// Errors with [`ContainerError::Empty`](super::ContainerError::Empty) if there is none.
    fn first(&self) -> Result<T>;

    /// All elements in insertion order.
    fn items(&self) -> Self::Items<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write-only capability over elements of type `T`.
///
/// Counterpart of [`Producer`]. An implementor storing some `U` may accept any
/// `T` that converts into `U`, so consumers are safe to treat contravariantly.
pub trait Consumer<T> {
    /// Appends item to the end.
    fn put(&mut self, item: T);

    fn put_all<I: IntoIterator<Item = T>>(&mut self, items: I)
    where
        Self: Sized,
    {
        for item in items {
            self.put(item);
        }
    }
}

/// It's responsibility is to both produce and consume elements of exactly `T`.
///
/// Since it reads and writes, a container must stay invariant in `T`:
/// it's implemented only for its own element type.
pub trait Container<T>: Producer<T> + Consumer<T> {}

impl<T, C: Producer<T> + Consumer<T>> Container<T> for C {}

impl<T, C: Consumer<T> + ?Sized> Consumer<T> for &mut C {
    fn put(&mut self, item: T) {
        (**self).put(item)
    }
}

impl<T: Clone> Producer<T> for [T] {
    type Items<'a> = std::iter::Cloned<std::slice::Iter<'a, T>> where Self: 'a;

    fn first(&self) -> Result<T> {
        <[T]>::first(self)
            .cloned()
            .ok_or_else(super::ContainerError::empty::<T>)
    }

    fn items(&self) -> Self::Items<'_> {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Consumer<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }
}
