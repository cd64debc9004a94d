//! Crafts - open-catalog ratings coined by players.
//!
//! Catalog rows are shared and kept; only the character's ledger row goes
//! away when a Craft drops to zero.

use storyteller_domain::common::{good_name, partial_match, MAX_NAME_LENGTH};
use storyteller_domain::{parse_rating, CharacterId, StatFamily, StoryError};
use tracing::debug;

use super::{OwnedStat, SheetError, StatCatalog, StatLedger};

#[derive(Clone)]
pub struct Crafts {
    catalog: StatCatalog,
    ledger: StatLedger,
}

impl Crafts {
    pub fn new(catalog: StatCatalog, ledger: StatLedger) -> Self {
        Self { catalog, ledger }
    }

    /// Set a Craft rating. Zero removes the character's row, matching the
    /// name against the Crafts they own.
    pub fn set(
        &self,
        character: CharacterId,
        name: &str,
        value: &str,
    ) -> Result<OwnedStat, SheetError> {
        let name = good_name(name, StatFamily::Crafts.singular(), MAX_NAME_LENGTH)?;
        let value = parse_rating(&name, value)?;

        if value == 0 {
            return self.remove(character, &name);
        }

        let definition = self
            .catalog
            .resolve_or_create([StatFamily::Crafts.root(), name.as_str()], Some(character))?;
        let mut entry = self.ledger.get_or_create_entry(character, &definition, value)?;
        if entry.value != value {
            self.ledger.set_value(&mut entry, value)?;
        }
        debug!(character_id = %character, stat = %definition.path, value, "Craft set");
        Ok(OwnedStat {
            name: definition.name().to_string(),
            value,
        })
    }

    fn remove(&self, character: CharacterId, fragment: &str) -> Result<OwnedStat, SheetError> {
        let rows = self
            .ledger
            .rows_under(character, &StatFamily::Crafts.root_path())?;
        let name = partial_match(
            StatFamily::Crafts.singular(),
            fragment,
            rows.iter().map(|r| r.name()),
        )?;
        let row = rows
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| StoryError::not_found("Craft", name, rows.iter().map(|r| r.name())))?;
        self.ledger.delete(&row.entry)?;
        debug!(character_id = %character, stat = %row.definition.path, "Craft removed");
        Ok(OwnedStat {
            name: name.to_string(),
            value: 0,
        })
    }

    /// Owned Crafts ordered by name.
    pub fn all(&self, character: CharacterId) -> Result<Vec<OwnedStat>, SheetError> {
        let rows = self
            .ledger
            .rows_under(character, &StatFamily::Crafts.root_path())?;
        let mut crafts: Vec<OwnedStat> = rows.iter().map(OwnedStat::from).collect();
        crafts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(crafts)
    }
}
