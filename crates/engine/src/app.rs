//! Application state and composition.

use std::sync::Arc;

use storyteller_domain::{PowerFamily, StatFamily, TemplateRegistry, CHARMS, EVOCATIONS, SPELLS};

use crate::entities::{Crafts, Merits, Powers, RatedStats, StatCatalog, StatLedger};
use crate::infrastructure::{
    memory::MemoryStore,
    ports::{CharacterRepo, StatCatalogRepo, StatLedgerRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports, family handlers, and use cases.
/// Passed to the editor by `Arc`.
pub struct App {
    pub repositories: Repositories,
    pub entities: Entities,
    pub use_cases: UseCases,
    pub registry: Arc<TemplateRegistry>,
}

/// Container for the repository ports.
pub struct Repositories {
    pub catalog: Arc<dyn StatCatalogRepo>,
    pub ledger: Arc<dyn StatLedgerRepo>,
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for the catalog, ledger, and one handler per stat family.
pub struct Entities {
    pub catalog: StatCatalog,
    pub ledger: StatLedger,
    pub attributes: RatedStats,
    pub abilities: RatedStats,
    pub styles: RatedStats,
    pub advantages: RatedStats,
    pub crafts: Crafts,
    pub merits: Merits,
    pub charms: Powers,
    pub spells: Powers,
    pub evocations: Powers,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: use_cases::CharacterSheetUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repositories: Repositories) -> Self {
        let registry = Arc::new(TemplateRegistry::new());

        let catalog = StatCatalog::new(repositories.catalog.clone());
        let ledger = StatLedger::new(repositories.ledger.clone());
        let rated = |family| RatedStats::new(family, catalog.clone(), ledger.clone());
        let powers = |family: PowerFamily| Powers::new(family, catalog.clone(), ledger.clone());

        let entities = Entities {
            attributes: rated(StatFamily::Attributes),
            abilities: rated(StatFamily::Abilities),
            styles: rated(StatFamily::Styles),
            advantages: rated(StatFamily::Advantages),
            crafts: Crafts::new(catalog.clone(), ledger.clone()),
            merits: Merits::new(catalog.clone(), ledger.clone()),
            charms: powers(CHARMS),
            spells: powers(SPELLS),
            evocations: powers(EVOCATIONS),
            catalog: catalog.clone(),
            ledger: ledger.clone(),
        };

        let change_template = use_cases::ChangeTemplate::new(
            repositories.character.clone(),
            registry.clone(),
            entities.attributes.clone(),
            entities.abilities.clone(),
            entities.advantages.clone(),
        );
        let character_sheet = use_cases::CharacterSheetUseCases::new(
            repositories.character.clone(),
            registry.clone(),
            entities.advantages.clone(),
            change_template,
        );

        Self {
            repositories,
            entities,
            use_cases: UseCases { character_sheet },
            registry,
        }
    }

    /// Wire every port to one in-memory store.
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self::new(Repositories {
            catalog: store.clone(),
            ledger: store.clone(),
            character: store,
        })
    }
}
