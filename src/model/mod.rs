//! Example element hierarchy used to exercise variance of cages and their views.
//!
//! A cage of gold fish is not a cage of fish:
//! ```compile_fail,E0308
//! use cage::{container::Cage, model::{Fish, GoldFish}};
//!
//! let gold_fish = Cage::from_iter([GoldFish::new("c")]);
//! let mut fish = Cage::<Fish>::new();
//! fish.transfer_from(&gold_fish);
//! ```
pub mod animal;

pub use animal::{Animal, Carp, Fish, GoldFish};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{container::Cage, core::*};

    fn names<P: Producer<Animal>>(producer: P) -> Vec<String> {
        producer.items().map(|animal| animal.name().to_owned()).collect()
    }

    #[test]
    fn fish_cage() {
        let mut fish = Cage::<Fish>::new();
        assert!(fish.first().unwrap_err().is_empty());

        fish.put(Carp::new("a").into());
        fish.put(Carp::new("b").into());
        assert_eq!(fish.first(), Ok(&Fish::from(Carp::new("a"))));

        let gold_fish = Cage::from_iter([GoldFish::new("c")]);
        fish.transfer_from_view(gold_fish.read());

        assert_eq!(
            fish.as_slice(),
            &[
                Fish::from(Carp::new("a")),
                Fish::from(Carp::new("b")),
                Fish::from(GoldFish::new("c")),
            ]
        );
        assert_eq!(gold_fish.as_slice(), &[GoldFish::new("c")]);
    }

    #[test]
    fn leaf_view_as_animal_producer() {
        let carps = Cage::from(vec![Carp::new("x"), Carp::new("y")]);
        assert_eq!(names(carps.read()), ["x", "y"]);

        let fish = Cage::<Fish>::from(vec![GoldFish::new("z").into()]);
        assert_eq!(names(fish.read()), ["z"]);
        assert_eq!(
            Producer::<Animal>::first(&carps.read()),
            Ok(Animal::from(Carp::new("x")))
        );
    }

    #[test]
    fn fish_into_animal_consumer() {
        let fish = Cage::<Fish>::from(vec![Carp::new("a").into(), GoldFish::new("b").into()]);
        let mut animals = Cage::<Animal>::new();
        fish.transfer_into(animals.write());
        assert_eq!(animals.len(), 2);
        assert_eq!(animals.first().map(Animal::name), Ok("a"));
        assert_eq!(fish.len(), 2);
    }

    #[test]
    fn same_type_transfer() {
        let mut a = Cage::<Fish>::from(vec![Carp::new("a").into()]);
        let b = Cage::<Fish>::from(vec![GoldFish::new("b").into()]);
        a.transfer_from(&b);
        assert_eq!(a.iter().map(Fish::name).collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(b.len(), 1);
    }
}
