#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod bar_kind;
pub mod catalog;
pub mod category;
pub mod config;
pub mod equipment;
pub mod gym;
pub mod gym_error;
pub mod inventory;
pub mod loadout;
pub mod plate;
pub mod requirement;
pub mod weight;

pub use catalog::achievable_weights;
pub use inventory::{available_equipment_kinds, normalize};
pub use loadout::resolve_loadout;
