pub mod pointer;
pub mod scroll;

pub use pointer::{wire_card_tilt, wire_hero_pointer};
pub use scroll::{wire_resize, wire_scroll, ScrollWiring};
