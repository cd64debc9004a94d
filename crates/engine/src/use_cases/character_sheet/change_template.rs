//! Change template use case.
//!
//! Switches a character to another kind or sub-caste and brings the sheet
//! back in line with the new template's rules.

use std::sync::Arc;

use storyteller_domain::{CharacterId, CharacterRecord, StoryError, TemplateDefinition, TemplateRegistry};
use tracing::info;

use crate::entities::{RatedStats, SheetError};
use crate::infrastructure::ports::CharacterRepo;

/// Change template use case.
///
/// Orchestrates: template resolution, mark reset, advantage floors,
/// extra-field reset, locked caste marks, record save.
pub struct ChangeTemplate {
    characters: Arc<dyn CharacterRepo>,
    registry: Arc<TemplateRegistry>,
    attributes: RatedStats,
    abilities: RatedStats,
    advantages: RatedStats,
}

impl ChangeTemplate {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        registry: Arc<TemplateRegistry>,
        attributes: RatedStats,
        abilities: RatedStats,
        advantages: RatedStats,
    ) -> Self {
        Self {
            characters,
            registry,
            attributes,
            abilities,
            advantages,
        }
    }

    /// Resolve `text` (`kind[/sub-caste]`) and apply it.
    ///
    /// Fails with `AlreadyInState` when neither kind nor sub-caste changes.
    pub fn execute(
        &self,
        character: CharacterId,
        text: &str,
    ) -> Result<TemplateDefinition, SheetError> {
        let mut record = self
            .characters
            .get(character)?
            .ok_or(SheetError::CharacterNotFound(character))?;
        let template = self.registry.resolve(text)?;
        if template.key() == record.template {
            return Err(StoryError::already_in_state(format!(
                "{} is already {}.",
                record.name,
                template.full_name()
            ))
            .into());
        }
        self.apply_to(&mut record, &template)?;
        Ok(template)
    }

    /// Apply `template` to `record` and save it.
    ///
    /// 1. Clears every Attribute and Ability mark.
    /// 2. Raises starting Advantages to the template's floor, never lowering.
    /// 3. Clears extra-field answers.
    /// 4. Marks locked sub-caste stats as Caste.
    pub fn apply_to(
        &self,
        record: &mut CharacterRecord,
        template: &TemplateDefinition,
    ) -> Result<(), SheetError> {
        let id = record.id;
        self.attributes.reset_sub(id)?;
        self.abilities.reset_sub(id)?;

        for (name, minimum) in &template.start_advantages {
            self.advantages.raise_to(id, template, name, *minimum)?;
        }

        record.extra.clear();

        if template.caste_locked {
            self.attributes.lock_caste(id, template)?;
            self.abilities.lock_caste(id, template)?;
        }

        let previous = std::mem::replace(&mut record.template, template.key());
        self.characters.save(record)?;
        info!(
            character_id = %id,
            from = %previous,
            to = %record.template,
            "Template changed"
        );
        Ok(())
    }
}
