//! Fixed-catalog rated families: Attributes, Abilities, Styles, Advantages.
//!
//! One handler type serves every fixed family. Per-stat behavior comes from
//! the domain's [`StatDescriptor`] table and the character's template.

use std::collections::HashMap;

use storyteller_domain::common::{good_name, partial_match, MAX_NAME_LENGTH};
use storyteller_domain::{
    parse_rating, CharacterId, CharacterSpecialty, CharacterStatEntry, FlagChange, FlagKind,
    LedgerRow, Mark, StatDefinition, StatDescriptor, StatFamily, StoryError, TemplateDefinition,
};
use tracing::debug;

use super::{LedgerFlag, SheetError, StatCatalog, StatLedger};

/// Read view of one stat for the sheet renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedStat {
    pub name: &'static str,
    pub value: u32,
    pub mark: Mark,
    pub supernal: bool,
}

impl RatedStat {
    pub fn is_favored(&self) -> bool {
        self.mark == Mark::Favored
    }

    pub fn is_caste(&self) -> bool {
        self.mark == Mark::Caste
    }
}

/// One specialty with the ability it hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyView {
    pub ability: String,
    pub name: String,
    pub value: u32,
}

#[derive(Clone)]
pub struct RatedStats {
    family: StatFamily,
    catalog: StatCatalog,
    ledger: StatLedger,
}

impl RatedStats {
    pub fn new(family: StatFamily, catalog: StatCatalog, ledger: StatLedger) -> Self {
        Self {
            family,
            catalog,
            ledger,
        }
    }

    pub fn family(&self) -> StatFamily {
        self.family
    }

    /// Resolve a name fragment against this family's fixed options.
    pub fn find(&self, fragment: &str) -> Result<StatDescriptor, StoryError> {
        let options = self.family.options();
        let name = partial_match(self.family.singular(), fragment, options.iter().copied())?;
        self.family
            .descriptor(name)
            .ok_or_else(|| StoryError::not_found(self.family.singular(), name, options.iter().copied()))
    }

    /// Rating of a stat that has never been written.
    fn default_value(&self, stat: &StatDescriptor, template: &TemplateDefinition) -> u32 {
        match self.family {
            StatFamily::Advantages => template
                .start_advantage(stat.name)
                .unwrap_or(stat.min_value)
                .max(stat.min_value),
            _ => stat.min_value,
        }
    }

    fn definition(&self, name: &str) -> Result<StatDefinition, SheetError> {
        self.catalog.resolve_or_create([self.family.root(), name], None)
    }

    /// Stored row for `name`, without creating anything.
    fn stored(
        &self,
        character: CharacterId,
        name: &str,
    ) -> Result<Option<CharacterStatEntry>, SheetError> {
        let path = self.family.path(name)?;
        match self.catalog.find(&path)? {
            Some(definition) => Ok(self.ledger.entry(character, definition.id)?),
            None => Ok(None),
        }
    }

    fn own_marks(&self, character: CharacterId, name: &str) -> Result<(Mark, bool), SheetError> {
        Ok(self
            .stored(character, name)?
            .map(|e| (e.mark(), e.is_supernal()))
            .unwrap_or_default())
    }

    /// Marks as the sheet shows them; Martial Arts reads Brawl's.
    fn marks(&self, character: CharacterId, stat: &StatDescriptor) -> Result<(Mark, bool), SheetError> {
        match (stat.inherits_marks, stat.linked) {
            (true, Some(source)) => self.own_marks(character, source),
            _ => self.own_marks(character, stat.name),
        }
    }

    fn derived_value(&self, character: CharacterId, source: StatFamily) -> Result<u32, SheetError> {
        let rows = self.ledger.rows_under(character, &source.root_path())?;
        Ok(rows.iter().map(|r| r.entry.value).max().unwrap_or(0))
    }

    fn value_of(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        stat: &StatDescriptor,
    ) -> Result<u32, SheetError> {
        if let Some(source) = stat.derived_from {
            return self.derived_value(character, source);
        }
        Ok(self
            .stored(character, stat.name)?
            .map(|e| e.value)
            .unwrap_or_else(|| self.default_value(stat, template)))
    }

    /// Displayed rating. Craft and Martial Arts are recomputed from the
    /// character's Crafts and Styles on every read.
    pub fn calculated_value(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
    ) -> Result<u32, SheetError> {
        let stat = self.find(fragment)?;
        self.value_of(character, template, &stat)
    }

    pub fn set(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
        value: &str,
    ) -> Result<(&'static str, u32), SheetError> {
        let stat = self.find(fragment)?;
        if let Some(source) = stat.derived_from {
            return Err(StoryError::not_settable(format!(
                "{} is calculated from your {source}. Set those instead.",
                stat.name
            ))
            .into());
        }
        let value = parse_rating(stat.name, value)?;
        if value < stat.min_value {
            return Err(StoryError::invalid_value(format!(
                "{} cannot be below {}!",
                self.family, stat.min_value
            ))
            .into());
        }

        let definition = self.definition(stat.name)?;
        let mut entry =
            self.ledger
                .get_or_create_entry(character, &definition, self.default_value(&stat, template))?;
        self.ledger.set_value(&mut entry, value)?;
        debug!(character_id = %character, stat = %definition.path, value, "Rating set");
        Ok((stat.name, value))
    }

    /// Raise a stat to `minimum` if it is currently lower. Never lowers.
    pub fn raise_to(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        name: &str,
        minimum: u32,
    ) -> Result<u32, SheetError> {
        let stat = self.find(name)?;
        let current = self.value_of(character, template, &stat)?;
        let stored = self.stored(character, stat.name)?;
        if current >= minimum && stored.is_some() {
            return Ok(current);
        }
        let target = current.max(minimum);
        let definition = self.definition(stat.name)?;
        let mut entry = self.ledger.get_or_create_entry(character, &definition, target)?;
        if entry.value != target {
            self.ledger.set_value(&mut entry, target)?;
        }
        debug!(character_id = %character, stat = %definition.path, value = target, "Rating raised");
        Ok(target)
    }

    pub fn is_favored(&self, character: CharacterId, fragment: &str) -> Result<bool, SheetError> {
        let stat = self.find(fragment)?;
        Ok(self.marks(character, &stat)?.0 == Mark::Favored)
    }

    pub fn is_caste(&self, character: CharacterId, fragment: &str) -> Result<bool, SheetError> {
        let stat = self.find(fragment)?;
        Ok(self.marks(character, &stat)?.0 == Mark::Caste)
    }

    pub fn is_supernal(&self, character: CharacterId, fragment: &str) -> Result<bool, SheetError> {
        let stat = self.find(fragment)?;
        Ok(self.marks(character, &stat)?.1)
    }

    pub fn toggle_favored(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
    ) -> Result<(&'static str, bool), SheetError> {
        self.set_flag(character, template, fragment, FlagKind::Favored, FlagChange::Toggle)
    }

    pub fn toggle_caste(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
    ) -> Result<(&'static str, bool), SheetError> {
        self.set_flag(character, template, fragment, FlagKind::Caste, FlagChange::Toggle)
    }

    pub fn toggle_supernal(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
    ) -> Result<(&'static str, bool), SheetError> {
        self.set_flag(character, template, fragment, FlagKind::Supernal, FlagChange::Toggle)
    }

    /// Turn one of the three marks on or off.
    ///
    /// Every rule is checked before the first write. Turning Caste off also
    /// clears Supernal, which is only valid on a Caste stat.
    pub fn set_flag(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
        flag: FlagKind,
        change: FlagChange,
    ) -> Result<(&'static str, bool), SheetError> {
        let stat = self.find(fragment)?;
        let label = template.flag_label(flag);

        if let (true, Some(source)) = (stat.inherits_marks, stat.linked) {
            return Err(StoryError::not_settable(format!(
                "{} takes its {label} status from {source}. Change {source} instead.",
                stat.name
            ))
            .into());
        }
        if !stat.can(flag) {
            return Err(
                StoryError::not_eligible(format!("{} cannot be {label}.", stat.name)).into(),
            );
        }
        if flag == FlagKind::Caste && template.caste_locked {
            return Err(StoryError::not_settable(format!(
                "{label} {} are set by your {label} and cannot be changed.",
                self.family
            ))
            .into());
        }

        let (mark, supernal) = self.own_marks(character, stat.name)?;
        let current = match flag {
            FlagKind::Favored => mark == Mark::Favored,
            FlagKind::Caste => mark == Mark::Caste,
            FlagKind::Supernal => supernal,
        };
        let target = change.target(current);
        if target == current {
            let err = if current {
                StoryError::already_in_state(format!("{} is already {label}.", stat.name))
            } else {
                StoryError::not_in_state(format!("{} is not {label}.", stat.name))
            };
            return Err(err.into());
        }
        if target {
            self.check_flag_on(character, template, &stat, flag, mark)?;
        }

        let definition = self.definition(stat.name)?;
        let mut entry =
            self.ledger
                .get_or_create_entry(character, &definition, self.default_value(&stat, template))?;
        match (flag, target) {
            (FlagKind::Favored, true) => {
                self.ledger
                    .set_flag(&mut entry, LedgerFlag::First, Mark::Favored.to_flag())?;
            }
            (FlagKind::Caste, true) => {
                self.ledger
                    .set_flag(&mut entry, LedgerFlag::First, Mark::Caste.to_flag())?;
            }
            (FlagKind::Supernal, on) => {
                self.ledger
                    .set_flag(&mut entry, LedgerFlag::Second, i32::from(on))?;
            }
            (FlagKind::Favored | FlagKind::Caste, false) => {
                self.ledger
                    .set_flag(&mut entry, LedgerFlag::First, Mark::Unset.to_flag())?;
                if entry.flag_2 != 0 {
                    self.ledger.set_flag(&mut entry, LedgerFlag::Second, 0)?;
                }
            }
        }
        debug!(
            character_id = %character,
            stat = %definition.path,
            flag = %flag,
            on = target,
            "Flag changed"
        );
        Ok((stat.name, target))
    }

    fn check_flag_on(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        stat: &StatDescriptor,
        flag: FlagKind,
        mark: Mark,
    ) -> Result<(), SheetError> {
        let favored = template.flag_label(FlagKind::Favored);
        let caste = template.flag_label(FlagKind::Caste);
        match flag {
            FlagKind::Favored if mark == Mark::Caste => {
                return Err(StoryError::conflicting_flag(format!(
                    "{} is already {caste}. It cannot also be {favored}.",
                    stat.name
                ))
                .into());
            }
            FlagKind::Caste if mark == Mark::Favored => {
                return Err(StoryError::conflicting_flag(format!(
                    "{} is already {favored}. It cannot also be {caste}.",
                    stat.name
                ))
                .into());
            }
            FlagKind::Caste if !template.caste_eligible(self.family).contains(&stat.name) => {
                return Err(StoryError::not_eligible(format!(
                    "{} is not a {} {caste} {}.",
                    stat.name,
                    template.sub_caste.unwrap_or(template.kind),
                    self.family.singular()
                ))
                .into());
            }
            FlagKind::Supernal if mark != Mark::Caste => {
                return Err(StoryError::not_eligible(format!(
                    "{} must be {caste} before it can be {}.",
                    stat.name,
                    template.flag_label(FlagKind::Supernal)
                ))
                .into());
            }
            _ => {}
        }

        if let (FlagKind::Favored | FlagKind::Caste, Some(partner)) = (flag, stat.linked) {
            let (partner_mark, _) = self.own_marks(character, partner)?;
            if partner_mark != Mark::Unset {
                return Err(StoryError::conflicting_flag(format!(
                    "{} shares its status with {partner}, which is already marked.",
                    stat.name
                ))
                .into());
            }
        }

        let limit = template.budget(self.family, flag);
        let used = self
            .ledger
            .rows_under(character, &self.family.root_path())?
            .iter()
            .filter(|row| row.name() != stat.name && flag_is_set(row, flag))
            .count();
        if used >= limit as usize {
            return Err(
                StoryError::budget_exceeded(template.flag_label(flag), self.family.root(), limit)
                    .into(),
            );
        }
        Ok(())
    }

    /// Clear every mark in this family for `character`.
    ///
    /// Returns how many rows were touched.
    pub fn reset_sub(&self, character: CharacterId) -> Result<usize, SheetError> {
        let mut cleared = 0;
        for row in self.ledger.rows_under(character, &self.family.root_path())? {
            let mut entry = row.entry;
            if entry.flag_1 == 0 && entry.flag_2 == 0 {
                continue;
            }
            self.ledger.set_flag(&mut entry, LedgerFlag::First, 0)?;
            self.ledger.set_flag(&mut entry, LedgerFlag::Second, 0)?;
            cleared += 1;
        }
        debug!(character_id = %character, family = %self.family, cleared, "Marks reset");
        Ok(cleared)
    }

    /// Mark the template's caste list as Caste without budget checks.
    ///
    /// Used for templates whose sub-caste fixes these stats.
    pub fn lock_caste(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
    ) -> Result<Vec<&'static str>, SheetError> {
        let mut locked = Vec::new();
        for name in template.caste_eligible(self.family) {
            let stat = self.find(name)?;
            if stat.inherits_marks || !stat.can_caste {
                continue;
            }
            let definition = self.definition(stat.name)?;
            let mut entry = self.ledger.get_or_create_entry(
                character,
                &definition,
                self.default_value(&stat, template),
            )?;
            self.ledger
                .set_flag(&mut entry, LedgerFlag::First, Mark::Caste.to_flag())?;
            locked.push(stat.name);
        }
        debug!(character_id = %character, family = %self.family, locked = locked.len(), "Caste locked");
        Ok(locked)
    }

    /// Every stat in the family, in catalog order.
    pub fn all(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
    ) -> Result<Vec<RatedStat>, SheetError> {
        let rows = self.ledger.rows_under(character, &self.family.root_path())?;
        let by_name: HashMap<&str, &CharacterStatEntry> =
            rows.iter().map(|r| (r.name(), &r.entry)).collect();

        let mut derived: HashMap<StatFamily, u32> = HashMap::new();
        let mut stats = Vec::with_capacity(self.family.options().len());
        for stat in self.family.descriptors() {
            let value = match stat.derived_from {
                Some(source) => match derived.get(&source) {
                    Some(v) => *v,
                    None => {
                        let v = self.derived_value(character, source)?;
                        derived.insert(source, v);
                        v
                    }
                },
                None => by_name
                    .get(stat.name)
                    .map(|e| e.value)
                    .unwrap_or_else(|| self.default_value(&stat, template)),
            };
            let mark_source = match (stat.inherits_marks, stat.linked) {
                (true, Some(source)) => source,
                _ => stat.name,
            };
            let (mark, supernal) = by_name
                .get(mark_source)
                .map(|e| (e.mark(), e.is_supernal()))
                .unwrap_or_default();
            stats.push(RatedStat {
                name: stat.name,
                value,
                mark,
                supernal,
            });
        }
        Ok(stats)
    }

    /// Add, change, or remove (value 0) a specialty under an Ability.
    pub fn set_specialty(
        &self,
        character: CharacterId,
        template: &TemplateDefinition,
        fragment: &str,
        name: &str,
        value: &str,
    ) -> Result<SpecialtyView, SheetError> {
        let stat = self.find(fragment)?;
        if !stat.can_specialize {
            return Err(StoryError::not_eligible(format!(
                "{} cannot have Specialties.",
                stat.name
            ))
            .into());
        }
        let name = good_name(name, "Specialty", MAX_NAME_LENGTH)?;
        let value = parse_rating(&name, value)?;

        let existing: Vec<CharacterSpecialty> = match self.stored(character, stat.name)? {
            Some(entry) => self
                .ledger
                .specialties(character)?
                .into_iter()
                .filter(|s| s.entry == entry.id)
                .collect(),
            None => Vec::new(),
        };
        let current = existing.iter().find(|s| s.name == name);

        if value == 0 {
            let specialty = current.ok_or_else(|| {
                StoryError::not_found(
                    format!("{} Specialty", stat.name),
                    name.as_str(),
                    existing.iter().map(|s| s.name.as_str()),
                )
            })?;
            self.ledger.delete_specialty(specialty.id)?;
            debug!(character_id = %character, ability = stat.name, specialty = %name, "Specialty removed");
            return Ok(SpecialtyView {
                ability: stat.name.to_string(),
                name,
                value: 0,
            });
        }

        let specialty = match current {
            Some(found) => CharacterSpecialty {
                value,
                ..found.clone()
            },
            None => {
                let definition = self.definition(stat.name)?;
                let entry = self.ledger.get_or_create_entry(
                    character,
                    &definition,
                    self.default_value(&stat, template),
                )?;
                CharacterSpecialty::new(&entry, name.clone(), value)
            }
        };
        self.ledger.save_specialty(&specialty)?;
        debug!(character_id = %character, ability = stat.name, specialty = %name, value, "Specialty set");
        Ok(SpecialtyView {
            ability: stat.name.to_string(),
            name,
            value,
        })
    }

    /// Specialties ordered by ability then name.
    pub fn specialties(&self, character: CharacterId) -> Result<Vec<SpecialtyView>, SheetError> {
        let rows = self.ledger.rows_under(character, &self.family.root_path())?;
        let abilities: HashMap<_, &str> = rows.iter().map(|r| (r.entry.id, r.name())).collect();
        let mut views: Vec<SpecialtyView> = self
            .ledger
            .specialties(character)?
            .into_iter()
            .filter_map(|s| {
                abilities.get(&s.entry).map(|ability| SpecialtyView {
                    ability: ability.to_string(),
                    name: s.name,
                    value: s.value,
                })
            })
            .collect();
        views.sort_by(|a, b| (&a.ability, &a.name).cmp(&(&b.ability, &b.name)));
        Ok(views)
    }
}

fn flag_is_set(row: &LedgerRow, flag: FlagKind) -> bool {
    match flag {
        FlagKind::Favored => row.entry.is_favored(),
        FlagKind::Caste => row.entry.is_caste(),
        FlagKind::Supernal => row.entry.is_supernal(),
    }
}
