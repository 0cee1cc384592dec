pub mod cage;
pub mod view;

pub use cage::Cage;
pub use view::{ReadView, ViewItems, WriteView};
