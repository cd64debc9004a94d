//! Entity modules - catalog, ledger, and the per-family handlers.
//!
//! Each module wraps operations for one layer of the sheet model.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod catalog;
pub mod crafts;
pub mod error;
pub mod ledger;
pub mod merits;
pub mod powers;
pub mod rated;

pub use catalog::StatCatalog;
pub use crafts::Crafts;
pub use error::SheetError;
pub use ledger::{LedgerFlag, OwnedStat, StatLedger};
pub use merits::{MeritChange, Merits, DEFAULT_MERIT_CATEGORY};
pub use powers::{GroupedPowers, OwnedPower, PowerChange, Powers};
pub use rated::{RatedStat, RatedStats, SpecialtyView};
