//! Character sheet use cases.
//!
//! Handles sheet-level operations that span more than one family: creating
//! the character, changing template, template extra fields, and the derived
//! resource pools.

mod change_template;

pub use change_template::ChangeTemplate;

use std::sync::Arc;

use storyteller_domain::common::{good_name, none_if_empty, partial_match, MAX_NAME_LENGTH};
use storyteller_domain::stats::names::ESSENCE;
use storyteller_domain::{
    CharacterId, CharacterRecord, FieldKind, StoryError, TemplateDefinition, TemplateRegistry,
};
use tracing::{debug, info};

use crate::entities::{RatedStats, SheetError};
use crate::infrastructure::ports::CharacterRepo;

// =============================================================================
// Result Types
// =============================================================================

/// A character record together with its resolved template.
#[derive(Debug, Clone)]
pub struct SheetContext {
    pub record: CharacterRecord,
    pub template: TemplateDefinition,
}

impl SheetContext {
    pub fn id(&self) -> CharacterId {
        self.record.id
    }
}

/// Result of opening a character by name.
#[derive(Debug, Clone)]
pub struct OpenCharacterResult {
    pub record: CharacterRecord,
    /// True when the character did not exist and was created.
    pub created: bool,
}

/// Result of answering an extra field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraFieldResult {
    pub field: &'static str,
    /// `None` when an optional field was cleared.
    pub value: Option<String>,
}

/// Maximum Essence pools for the character's current Essence rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePools {
    pub essence: u32,
    pub personal: Option<u32>,
    pub peripheral: Option<u32>,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    characters: Arc<dyn CharacterRepo>,
    registry: Arc<TemplateRegistry>,
    advantages: RatedStats,
    change_template: ChangeTemplate,
}

impl CharacterSheetUseCases {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        registry: Arc<TemplateRegistry>,
        advantages: RatedStats,
        change_template: ChangeTemplate,
    ) -> Self {
        Self {
            characters,
            registry,
            advantages,
            change_template,
        }
    }

    /// Load a character and resolve its template.
    pub fn load(&self, character: CharacterId) -> Result<SheetContext, SheetError> {
        let record = self
            .characters
            .get(character)?
            .ok_or(SheetError::CharacterNotFound(character))?;
        let template = self.registry.get(&record.template)?;
        Ok(SheetContext { record, template })
    }

    /// Open a character by name, creating it if absent.
    ///
    /// New characters start Mortal; `template` (`kind[/sub-caste]`) is then
    /// applied if given. Existing characters are returned untouched.
    pub fn open(
        &self,
        name: &str,
        template: Option<&str>,
    ) -> Result<OpenCharacterResult, SheetError> {
        let name = good_name(name, "character", MAX_NAME_LENGTH)?;
        if let Some(record) = self.characters.find_by_name(&name)? {
            return Ok(OpenCharacterResult {
                record,
                created: false,
            });
        }

        let template = match template.and_then(none_if_empty) {
            Some(text) => self.registry.resolve(text)?,
            None => self.registry.get(&storyteller_domain::TemplateKey::mortal())?,
        };
        let mut record = CharacterRecord::new(name);
        self.change_template.apply_to(&mut record, &template)?;
        info!(
            character_id = %record.id,
            name = %record.name,
            template = %record.template,
            "Character created"
        );
        Ok(OpenCharacterResult {
            record,
            created: true,
        })
    }

    pub fn change_template(
        &self,
        character: CharacterId,
        text: &str,
    ) -> Result<TemplateDefinition, SheetError> {
        self.change_template.execute(character, text)
    }

    /// Answer one of the template's extra fields.
    ///
    /// `Choice` answers are partial-matched against their list. Required
    /// fields reject blank answers; optional ones treat blank as "clear".
    pub fn set_extra_field(
        &self,
        character: CharacterId,
        field: &str,
        value: &str,
    ) -> Result<ExtraFieldResult, SheetError> {
        let SheetContext {
            mut record,
            template,
        } = self.load(character)?;
        if template.extra_fields.is_empty() {
            return Err(StoryError::not_eligible(format!(
                "{} characters have no extra fields.",
                template.kind
            ))
            .into());
        }
        let name = partial_match("Field", field, template.extra_fields.iter().map(|f| f.name))?;
        let field = template
            .extra_field(name)
            .copied()
            .ok_or_else(|| StoryError::not_found("Field", name, [name]))?;

        let value = value.trim();
        let answer = match field.kind {
            FieldKind::Required if value.is_empty() => {
                return Err(
                    StoryError::invalid_value(format!("{} cannot be empty.", field.name)).into(),
                );
            }
            FieldKind::Required => Some(value.to_string()),
            FieldKind::Optional => none_if_empty(value).map(str::to_string),
            FieldKind::Choice(choices) => {
                Some(partial_match(field.name, value, choices.iter().copied())?.to_string())
            }
        };

        match &answer {
            Some(text) => {
                record.extra.insert(field.name.to_string(), text.clone());
            }
            None => {
                record.extra.remove(field.name);
            }
        }
        self.characters.save(&record)?;
        debug!(character_id = %character, field = field.name, value = ?answer, "Extra field set");
        Ok(ExtraFieldResult {
            field: field.name,
            value: answer,
        })
    }

    pub fn extra_field(
        &self,
        character: CharacterId,
        field: &str,
    ) -> Result<Option<String>, SheetError> {
        let context = self.load(character)?;
        Ok(context.record.extra_field(field).map(str::to_string))
    }

    /// Personal and peripheral pool maxima from the current Essence.
    pub fn resource_pools(&self, character: CharacterId) -> Result<ResourcePools, SheetError> {
        let context = self.load(character)?;
        let essence = self
            .advantages
            .calculated_value(character, &context.template, ESSENCE)?;
        Ok(ResourcePools {
            essence,
            personal: context.template.personal_pool_max(essence),
            peripheral: context.template.peripheral_pool_max(essence),
        })
    }
}
