//! Merits - player-named dots grouped under fixed categories.

use std::collections::BTreeMap;

use storyteller_domain::common::{good_name, partial_match, MAX_NAME_LENGTH};
use storyteller_domain::stats::names::MERIT_CATEGORIES;
use storyteller_domain::{parse_rating, CharacterId, StatFamily, StoryError};
use tracing::debug;

use super::{OwnedStat, SheetError, StatCatalog, StatLedger};

/// Category used when the player names none.
pub const DEFAULT_MERIT_CATEGORY: &str = "General";

/// Result of a Merit change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeritChange {
    pub category: &'static str,
    pub name: String,
    pub value: u32,
}

#[derive(Clone)]
pub struct Merits {
    catalog: StatCatalog,
    ledger: StatLedger,
}

impl Merits {
    pub fn new(catalog: StatCatalog, ledger: StatLedger) -> Self {
        Self { catalog, ledger }
    }

    fn category(&self, fragment: Option<&str>) -> Result<&'static str, StoryError> {
        match fragment.map(str::trim).filter(|f| !f.is_empty()) {
            Some(text) => partial_match("Merit Category", text, MERIT_CATEGORIES.iter().copied()),
            None => Ok(DEFAULT_MERIT_CATEGORY),
        }
    }

    /// Set a Merit's dots. Zero removes it.
    pub fn set(
        &self,
        character: CharacterId,
        category: Option<&str>,
        name: &str,
        value: &str,
    ) -> Result<MeritChange, SheetError> {
        let category = self.category(category)?;
        let name = good_name(name, StatFamily::Merits.singular(), MAX_NAME_LENGTH)?;
        let value = parse_rating(&name, value)?;
        let root = StatFamily::Merits.root();

        if value == 0 {
            let path = StatFamily::Merits.root_path().child(category)?.child(&name)?;
            let entry = match self.catalog.find(&path)? {
                Some(definition) => self.ledger.entry(character, definition.id)?,
                None => None,
            };
            let Some(entry) = entry else {
                let owned = self.all_grouped_by_category(character)?;
                let choices = owned
                    .get(category)
                    .map(|merits| merits.iter().map(|m| m.name.clone()).collect::<Vec<_>>())
                    .unwrap_or_default();
                return Err(
                    StoryError::not_found(format!("{category} Merit"), name, choices).into(),
                );
            };
            self.ledger.delete(&entry)?;
            debug!(character_id = %character, stat = %path, "Merit removed");
            return Ok(MeritChange {
                category,
                name,
                value: 0,
            });
        }

        let definition =
            self.catalog
                .resolve_or_create([root, category, name.as_str()], Some(character))?;
        let mut entry = self.ledger.get_or_create_entry(character, &definition, value)?;
        if entry.value != value {
            self.ledger.set_value(&mut entry, value)?;
        }
        debug!(character_id = %character, stat = %definition.path, value, "Merit set");
        Ok(MeritChange {
            category,
            name,
            value,
        })
    }

    /// Category -> Merits ordered by name.
    pub fn all_grouped_by_category(
        &self,
        character: CharacterId,
    ) -> Result<BTreeMap<String, Vec<OwnedStat>>, SheetError> {
        let mut grouped: BTreeMap<String, Vec<OwnedStat>> = BTreeMap::new();
        for row in self
            .ledger
            .rows_under(character, &StatFamily::Merits.root_path())?
        {
            let category = row.definition.path.segment(1).unwrap_or_default().to_string();
            grouped.entry(category).or_default().push(OwnedStat::from(&row));
        }
        for merits in grouped.values_mut() {
            merits.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(grouped)
    }
}
