pub mod dict;
pub mod resolver;
pub mod segment;
pub mod settings;
pub mod stats;
pub mod unicode;

pub use resolver::{resolve, resolve_detailed, Resolution, Strategy};
