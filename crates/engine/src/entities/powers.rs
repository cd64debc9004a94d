//! Repurchasable powers: Charms, Spells, Evocations.
//!
//! One handler parameterized by the family's [`PowerFamily`] category rule.
//! Powers are addressed as `Family/Main/Sub/Name`; the ledger value is the
//! purchase count.

use std::collections::BTreeMap;

use storyteller_domain::common::{good_name, MAX_NAME_LENGTH};
use storyteller_domain::{
    CategoryRule, CharacterId, PowerFamily, StatPath, StoryError, TemplateDefinition,
};
use tracing::debug;

use super::{SheetError, StatCatalog, StatLedger};

/// A resolved power and the character's purchase count after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerChange {
    pub path: StatPath,
    pub count: u32,
}

impl PowerChange {
    pub fn name(&self) -> &str {
        self.path.name()
    }
}

/// An owned power as listed on the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedPower {
    pub name: String,
    pub count: u32,
}

/// Main category -> sub-category -> powers ordered by name.
pub type GroupedPowers = BTreeMap<String, BTreeMap<String, Vec<OwnedPower>>>;

#[derive(Clone)]
pub struct Powers {
    family: PowerFamily,
    catalog: StatCatalog,
    ledger: StatLedger,
}

impl Powers {
    pub fn new(family: PowerFamily, catalog: StatCatalog, ledger: StatLedger) -> Self {
        Self {
            family,
            catalog,
            ledger,
        }
    }

    pub fn family(&self) -> PowerFamily {
        self.family
    }

    /// Validate all three levels and build the normalized path.
    fn resolve_path(
        &self,
        template: &TemplateDefinition,
        main: Option<&str>,
        sub: &str,
        name: &str,
    ) -> Result<StatPath, StoryError> {
        let main = self
            .family
            .main_category(main, template.native_charm_category)?;
        let sub = self.family.sub_category(main, sub)?;
        let name = good_name(name, self.family.what(), MAX_NAME_LENGTH)?;
        StatPath::new([self.family.family.root(), main, sub.as_str(), name.as_str()])
    }

    /// Buy a power, or buy it again. Repeat purchases raise the count.
    pub fn add(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        sub: &str,
        name: &str,
        main: Option<&str>,
    ) -> Result<PowerChange, SheetError> {
        let path = self.resolve_path(template, main, sub, name)?;
        // Free-text sub-categories (artifacts) are coined by the player
        let creator = match self.family.rule {
            CategoryRule::FreeText { .. } => Some(character),
            CategoryRule::Listed { .. } => None,
        };
        let definition = self.catalog.resolve_or_create(path.segments(), creator)?;
        let mut entry = self.ledger.get_or_create_entry(character, &definition, 0)?;
        let count = entry.value + 1;
        self.ledger.set_value(&mut entry, count)?;
        debug!(character_id = %character, stat = %definition.path, count, "Power added");
        Ok(PowerChange {
            path: definition.path,
            count,
        })
    }

    /// Drop one purchase; the row is deleted when the count reaches zero.
    pub fn remove(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        sub: &str,
        name: &str,
        main: Option<&str>,
    ) -> Result<PowerChange, SheetError> {
        let path = self.resolve_path(template, main, sub, name)?;
        let entry = match self.catalog.find(&path)? {
            Some(definition) => self.ledger.entry(character, definition.id)?,
            None => None,
        };
        let Some(mut entry) = entry else {
            let owned = self
                .ledger
                .rows_under(character, &self.family.family.root_path())?;
            return Err(StoryError::not_found(
                self.family.what(),
                path.name(),
                owned.iter().map(|r| r.name().to_string()),
            )
            .into());
        };

        let count = entry.value.saturating_sub(1);
        if count == 0 {
            self.ledger.delete(&entry)?;
        } else {
            self.ledger.set_value(&mut entry, count)?;
        }
        debug!(character_id = %character, stat = %path, count, "Power removed");
        Ok(PowerChange { path, count })
    }

    pub fn all_grouped_by_category(
        &self,
        character: CharacterId,
    ) -> Result<GroupedPowers, SheetError> {
        let mut grouped = GroupedPowers::new();
        let rows = self
            .ledger
            .rows_under(character, &self.family.family.root_path())?;
        for row in rows {
            let (Some(main), Some(sub)) = (row.definition.path.segment(1), row.definition.path.segment(2))
            else {
                continue;
            };
            grouped
                .entry(main.to_string())
                .or_default()
                .entry(sub.to_string())
                .or_default()
                .push(OwnedPower {
                    name: row.name().to_string(),
                    count: row.entry.value,
                });
        }
        for powers in grouped.values_mut().flat_map(BTreeMap::values_mut) {
            powers.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(grouped)
    }

    /// Sum of purchase counts. Compared against the template's starting
    /// allowance for display only.
    pub fn total_count(&self, character: CharacterId) -> Result<u32, SheetError> {
        Ok(self
            .ledger
            .rows_under(character, &self.family.family.root_path())?
            .iter()
            .map(|r| r.entry.value)
            .sum())
    }
}
