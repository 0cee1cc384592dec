//! # Goal
//! Typed containers that are sound to read from and write into, with the
//! variance rules made explicit through capabilities instead of runtime casts.
//!
//! # Features
//! - Storage, through [`Cage`](container::Cage).
//!      - Responsible for: holding elements of exactly one type, in insertion order.
//!      - Invariant in its element type, since it both reads and writes.
//! - Reading, through [`Producer`](core::Producer) and [`ReadView`](container::ReadView).
//!      - Covariant: a view over `S` produces any `T` that `S` converts into.
//! - Writing, through [`Consumer`](core::Consumer) and [`WriteView`](container::WriteView).
//!      - Contravariant: a view over `U` consumes any `T` that converts into `U`.
//!
//! # Architecture
//! - Core - capability traits and errors.
//! - Container - the cage and its views.
//! - Model - example element hierarchy, `Animal` > `Fish` > `GoldFish`/`Carp`.
//!
//! Rust has no subtyping between user types, so "S is a subtype of T" is
//! expressed as `S: Into<T>`. The checks happen at compile time:
//!
//! ```
//! use cage::container::Cage;
//!
//! let mut wide = Cage::<u64>::new();
//! assert!(wide.first().is_err());
//! wide.put(1);
//! wide.put(2);
//!
//! let narrow = Cage::from_iter([3u32]);
//! wide.transfer_from_view(narrow.read());
//! assert_eq!(wide.as_slice(), &[1, 2, 3]);
//! ```

//? Important decisions:
//? - Containers are single owner. Concurrent use needs an external lock per cage.
//? - Transfers clone, the source is never drained.

pub mod container;
pub mod core;
#[cfg(feature = "models")]
pub mod model;

pub use crate::core::{ContainerError, Result};
