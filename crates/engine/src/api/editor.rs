//! Line-oriented character editor.
//!
//! The editor holds a target character and a mode. Each input line is
//! dispatched to the handler for the current mode and produces one reply.

use std::fmt;
use std::sync::Arc;

use storyteller_domain::common::partial_match;
use storyteller_domain::{CharacterId, FlagChange, FlagKind, StoryError};
use tracing::warn;

use super::command::Command;
use super::render;
use crate::app::App;
use crate::entities::{Powers, RatedStats, SheetError};
use crate::use_cases::SheetContext;

/// Which part of the sheet the editor is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Template,
    Attributes,
    Abilities,
    Merits,
    Charms,
    Spells,
    Evocations,
}

impl EditorMode {
    pub const ALL: [EditorMode; 7] = [
        Self::Template,
        Self::Attributes,
        Self::Abilities,
        Self::Merits,
        Self::Charms,
        Self::Spells,
        Self::Evocations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Template => "Template",
            Self::Attributes => "Attributes",
            Self::Abilities => "Abilities",
            Self::Merits => "Merits",
            Self::Charms => "Charms",
            Self::Spells => "Spells",
            Self::Evocations => "Evocations",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Verbs specific to this mode, plus the usage line for each.
    fn verbs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Template => &[("set", "set <advantage>=<value>")],
            Self::Attributes => &[
                ("set", "set <attribute>=<value>"),
                ("favor", "favor <attribute>"),
                ("caste", "caste <attribute>"),
                ("supernal", "supernal <attribute>"),
            ],
            Self::Abilities => &[
                ("set", "set <ability>=<value>"),
                ("favor", "favor <ability>"),
                ("caste", "caste <ability>"),
                ("supernal", "supernal <ability>"),
                ("craft", "craft <name>=<value>"),
                ("style", "style <style>=<value>"),
                ("specialty", "specialty <ability>/<name>=<value>"),
            ],
            Self::Merits => &[("set", "set [<category>/]<name>=<value>")],
            Self::Charms | Self::Spells => &[
                ("add", "add [<category>/]<sub-category>=<name>"),
                ("remove", "remove [<category>/]<sub-category>=<name>"),
            ],
            Self::Evocations => &[
                ("add", "add <artifact>=<name>"),
                ("remove", "remove <artifact>=<name>"),
            ],
        }
    }

    fn has_flags(&self) -> bool {
        matches!(self, Self::Attributes | Self::Abilities)
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const COMMON_VERBS: [(&str, &str); 5] = [
    ("mode", "mode <template|attributes|abilities|merits|charms|spells|evocations>"),
    ("help", "help"),
    ("show", "show"),
    ("template", "template <kind>[/<sub-caste>]"),
    ("field", "field <name>=<value>"),
];

pub struct Editor {
    app: Arc<App>,
    character: CharacterId,
    mode: EditorMode,
}

impl Editor {
    pub fn new(app: Arc<App>, character: CharacterId) -> Self {
        Self {
            app,
            character,
            mode: EditorMode::Template,
        }
    }

    /// Open (or create) a character by name and start editing it.
    pub fn open(app: Arc<App>, name: &str, template: Option<&str>) -> Result<Self, SheetError> {
        let opened = app.use_cases.character_sheet.open(name, template)?;
        Ok(Self::new(app, opened.record.id))
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Handle one input line and return the reply text.
    ///
    /// Rejections come back as `ERROR: <message>`. Storage failures are
    /// also logged since they are not the player's doing.
    pub fn handle(&mut self, line: &str) -> String {
        match self.dispatch(line) {
            Ok(reply) => reply,
            Err(err) => {
                if let SheetError::Repo(source) = &err {
                    warn!(character_id = %self.character, error = %source, line, "Editor command failed");
                }
                format!("ERROR: {err}")
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<String, SheetError> {
        let Some(cmd) = Command::parse(line) else {
            return Ok(String::new());
        };
        let context = self.app.use_cases.character_sheet.load(self.character)?;
        let sub_name = context.template.sub_name;

        let mut verbs: Vec<&'static str> = COMMON_VERBS.iter().map(|(v, _)| *v).collect();
        verbs.extend(self.mode.verbs().iter().map(|(v, _)| *v));
        if self.mode.has_flags() && !sub_name.eq_ignore_ascii_case("caste") {
            verbs.push(sub_name);
        }
        let verb = partial_match("Command", cmd.verb, verbs)?.to_lowercase();

        match verb.as_str() {
            "mode" => self.switch_mode(cmd.lsargs, &context),
            "help" => Ok(self.help(&context)),
            "show" => render::section(&self.app, &context, self.mode),
            "template" => {
                let template = self
                    .app
                    .use_cases
                    .character_sheet
                    .change_template(self.character, cmd.lsargs)?;
                Ok(format!(
                    "{} is now {}.",
                    context.record.name,
                    template.full_name()
                ))
            }
            "field" => {
                let value = cmd.value("field <name>=<value>")?;
                let result = self.app.use_cases.character_sheet.set_extra_field(
                    self.character,
                    cmd.lsargs,
                    value,
                )?;
                Ok(match result.value {
                    Some(value) => format!("{} set to {value}.", result.field),
                    None => format!("{} cleared.", result.field),
                })
            }
            "set" => self.set(&cmd, &context),
            "favor" => self.flag(&cmd, &context, FlagKind::Favored),
            "caste" => self.flag(&cmd, &context, FlagKind::Caste),
            "supernal" => self.flag(&cmd, &context, FlagKind::Supernal),
            "craft" => {
                let value = cmd.value("craft <name>=<value>")?;
                let craft = self.app.entities.crafts.set(self.character, cmd.lsargs, value)?;
                Ok(rating_reply("Craft", &craft.name, craft.value))
            }
            "style" => {
                let value = cmd.value("style <style>=<value>")?;
                let (name, value) = self.app.entities.styles.set(
                    self.character,
                    &context.template,
                    cmd.lsargs,
                    value,
                )?;
                Ok(format!("{name} set to {value}."))
            }
            "specialty" => {
                let value = cmd.value("specialty <ability>/<name>=<value>")?;
                let (Some(ability), name) = cmd.qualified_lhs() else {
                    return Err(StoryError::invalid_value(
                        "Usage: specialty <ability>/<name>=<value>",
                    )
                    .into());
                };
                let view = self.app.entities.abilities.set_specialty(
                    self.character,
                    &context.template,
                    ability,
                    name,
                    value,
                )?;
                Ok(rating_reply(
                    &format!("{} Specialty", view.ability),
                    &view.name,
                    view.value,
                ))
            }
            "add" => self.power(&cmd, &context, true),
            "remove" => self.power(&cmd, &context, false),
            // The template's own label for the Caste tier ("aspect")
            other if other.eq_ignore_ascii_case(sub_name) => {
                self.flag(&cmd, &context, FlagKind::Caste)
            }
            other => Err(StoryError::not_found("Command", other, verbs_for(self.mode)).into()),
        }
    }

    fn switch_mode(&mut self, text: &str, context: &SheetContext) -> Result<String, SheetError> {
        let name = partial_match("Mode", text, EditorMode::ALL.iter().map(|m| m.name()))?;
        let mode = EditorMode::from_name(name)
            .ok_or_else(|| StoryError::not_found("Mode", name, EditorMode::ALL.map(|m| m.name())))?;
        self.mode = mode;
        let sheet = render::section(&self.app, context, mode)?;
        Ok(format!("Now editing {mode}.\n{sheet}"))
    }

    fn help(&self, context: &SheetContext) -> String {
        let mut lines = vec![format!("Editing {} ({}). Commands:", context.record.name, self.mode)];
        lines.extend(COMMON_VERBS.iter().map(|(_, usage)| format!("  {usage}")));
        lines.extend(self.mode.verbs().iter().map(|(_, usage)| format!("  {usage}")));
        if self.mode.has_flags() && !context.template.sub_name.eq_ignore_ascii_case("caste") {
            lines.push(format!(
                "  {} <stat>",
                context.template.sub_name.to_lowercase()
            ));
        }
        lines.join("\n")
    }

    fn rated(&self) -> Result<&RatedStats, StoryError> {
        match self.mode {
            EditorMode::Template => Ok(&self.app.entities.advantages),
            EditorMode::Attributes => Ok(&self.app.entities.attributes),
            EditorMode::Abilities => Ok(&self.app.entities.abilities),
            mode => Err(not_in_mode(mode)),
        }
    }

    fn powers(&self) -> Result<&Powers, StoryError> {
        match self.mode {
            EditorMode::Charms => Ok(&self.app.entities.charms),
            EditorMode::Spells => Ok(&self.app.entities.spells),
            EditorMode::Evocations => Ok(&self.app.entities.evocations),
            mode => Err(not_in_mode(mode)),
        }
    }

    fn set(&self, cmd: &Command<'_>, context: &SheetContext) -> Result<String, SheetError> {
        if self.mode == EditorMode::Merits {
            let value = cmd.value("set [<category>/]<name>=<value>")?;
            let (category, name) = cmd.qualified_lhs();
            let merit = self
                .app
                .entities
                .merits
                .set(self.character, category, name, value)?;
            return Ok(rating_reply(
                &format!("{} Merit", merit.category),
                &merit.name,
                merit.value,
            ));
        }
        let handler = self.rated()?;
        let value = cmd.value("set <stat>=<value>")?;
        let (name, value) = handler.set(self.character, &context.template, cmd.lsargs, value)?;
        Ok(format!("{name} set to {value}."))
    }

    fn flag(
        &self,
        cmd: &Command<'_>,
        context: &SheetContext,
        flag: FlagKind,
    ) -> Result<String, SheetError> {
        let handler = self.rated()?;
        let (name, on) = handler.set_flag(
            self.character,
            &context.template,
            cmd.lsargs,
            flag,
            FlagChange::Toggle,
        )?;
        let label = context.template.flag_label(flag);
        Ok(if on {
            format!("{name} is now {label}.")
        } else {
            format!("{name} is no longer {label}.")
        })
    }

    fn power(&self, cmd: &Command<'_>, context: &SheetContext, add: bool) -> Result<String, SheetError> {
        let handler = self.powers()?;
        let name = cmd.value(if add {
            "add [<category>/]<sub-category>=<name>"
        } else {
            "remove [<category>/]<sub-category>=<name>"
        })?;
        // Artifact names are free text
        let (main, sub) = match self.mode {
            EditorMode::Evocations => (None, cmd.lsargs),
            _ => cmd.qualified_lhs(),
        };
        let what = handler.family().what();
        if add {
            let change = handler.add(self.character, &context.template, sub, name, main)?;
            Ok(format!(
                "{what} {} added under {} (x{}).",
                change.name(),
                category_of(&change.path),
                change.count
            ))
        } else {
            let change = handler.remove(self.character, &context.template, sub, name, main)?;
            Ok(if change.count == 0 {
                format!("{what} {} removed.", change.name())
            } else {
                format!("{what} {} reduced to x{}.", change.name(), change.count)
            })
        }
    }
}

fn verbs_for(mode: EditorMode) -> Vec<&'static str> {
    COMMON_VERBS
        .iter()
        .chain(mode.verbs())
        .map(|(v, _)| *v)
        .collect()
}

fn not_in_mode(mode: EditorMode) -> StoryError {
    StoryError::not_eligible(format!("That command is not available in {mode} mode."))
}

fn rating_reply(what: &str, name: &str, value: u32) -> String {
    if value == 0 {
        format!("{what} {name} removed.")
    } else {
        format!("{what} {name} set to {value}.")
    }
}

fn category_of(path: &storyteller_domain::StatPath) -> String {
    let main = path.segment(1).unwrap_or_default();
    let sub = path.segment(2).unwrap_or_default();
    format!("{main}/{sub}")
}
