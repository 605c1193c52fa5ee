//! Small compositions of atoms.

mod card;
mod info_card;

pub use card::{Card, CardProps, card_style};
pub use info_card::{InfoCard, InfoCardProps};
