//! Static stat catalog data: families, descriptors, and power categories.

mod family;
pub mod names;
pub mod powers;

pub use family::{parse_rating, StatDescriptor, StatFamily};
pub use powers::{CategoryRule, DefaultCategory, PowerFamily, CHARMS, EVOCATIONS, SPELLS};
