use super::Cage;
use crate::core::*;

pub type ViewItems<'a, S, T> =
    std::iter::Map<std::iter::Cloned<std::slice::Iter<'a, S>>, fn(S) -> T>;

/// Producer only view of a [`Cage<S>`].
///
/// Covariant: it is a [`Producer<T>`] for every `T` that `S` converts into,
/// so a view of gold fish can be passed wherever a producer of fish is expected.
///
/// There is no way to write through it:
/// ```compile_fail,E0599
/// use cage::{container::Cage, core::Consumer};
///
/// let mut cage = Cage::<u32>::new();
/// let mut view = cage.read();
/// view.put(1u32);
/// ```
#[derive(Debug)]
pub struct ReadView<'a, S> {
    cage: &'a Cage<S>,
}

impl<'a, S> ReadView<'a, S> {
    pub fn new(cage: &'a Cage<S>) -> Self {
        Self { cage }
    }
}

impl<'a, S> Clone for ReadView<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for ReadView<'a, S> {}

impl<'a, S: Clone + Into<T>, T> Producer<T> for ReadView<'a, S> {
    type Items<'b> = ViewItems<'b, S, T> where Self: 'b;

    fn first(&self) -> Result<T> {
        match self.cage.as_slice().first() {
            Some(element) => Ok(element.clone().into()),
            None => Err(ContainerError::empty::<S>()),
        }
    }

    fn items(&self) -> Self::Items<'_> {
        self.cage
            .as_slice()
            .iter()
            .cloned()
            .map(Into::into as fn(S) -> T)
    }

    fn len(&self) -> usize {
        self.cage.len()
    }
}

/// Consumer only view of a [`Cage<U>`].
///
/// Contravariant: it is a [`Consumer<T>`] for every `T` that converts into `U`,
/// so a view of animals accepts fish.
///
/// There is no way to read through it:
/// ```compile_fail,E0599
/// use cage::{container::Cage, core::Producer};
///
/// let mut cage = Cage::from(vec![1u32]);
/// let view = cage.write();
/// let first: u32 = view.first().unwrap();
/// ```
#[derive(Debug)]
pub struct WriteView<'a, U> {
    cage: &'a mut Cage<U>,
}

impl<'a, U> WriteView<'a, U> {
    pub fn new(cage: &'a mut Cage<U>) -> Self {
        Self { cage }
    }
}

impl<'a, T: Into<U>, U> Consumer<T> for WriteView<'a, U> {
    fn put(&mut self, item: T) {
        self.cage.put(item.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<P: Producer<i64>>(producer: P) -> Vec<i64> {
        producer.items().collect()
    }

    #[test]
    fn read_view_covariant() {
        let cage = Cage::<i8>::from(vec![-3, 4]);
        assert_eq!(collect(cage.read()), vec![-3i64, 4]);
        assert_eq!(Producer::<i64>::first(&cage.read()), Ok(-3));
        assert_eq!(Producer::<i64>::len(&cage.read()), 2);
    }

    #[test]
    fn read_view_identity() {
        let cage = Cage::<i64>::from(vec![9]);
        assert_eq!(collect(cage.read()), vec![9]);
    }

    #[test]
    fn read_view_empty() {
        let cage = Cage::<u8>::new();
        let view = cage.read();
        let error = Producer::<u16>::first(&view).unwrap_err();
        assert_eq!(error, ContainerError::empty::<u8>());
        assert!(Producer::<u16>::is_empty(&view));
    }

    #[test]
    fn read_view_leaves_cage() {
        let cage = Cage::from(vec![String::from("a")]);
        let view = cage.read();
        let once: Vec<String> = Producer::<String>::items(&view).collect();
        let twice: Vec<String> = Producer::<String>::items(&view).collect();
        assert_eq!(once, twice);
        assert_eq!(cage.as_slice(), &[String::from("a")]);
    }

    #[test]
    fn write_view_contravariant() {
        let mut cage = Cage::<i64>::new();
        {
            let mut view = cage.write();
            view.put(1i8);
            view.put(2u32);
            view.put_all([3i64, 4]);
        }
        assert_eq!(cage.as_slice(), &[1, 2, 3, 4]);
    }
}
