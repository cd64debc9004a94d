//! Plain-text sheet sections for the `show` verb.

use storyteller_domain::{FieldKind, FlagKind, StatFamily, TemplateDefinition};

use super::EditorMode;
use crate::app::App;
use crate::entities::{GroupedPowers, Powers, RatedStat, RatedStats, SheetError};
use crate::use_cases::SheetContext;

pub(super) fn section(
    app: &App,
    context: &SheetContext,
    mode: EditorMode,
) -> Result<String, SheetError> {
    let mut lines = vec![format!(
        "{} - {}",
        context.record.name,
        context.template.full_name()
    )];
    match mode {
        EditorMode::Template => template(app, context, &mut lines)?,
        EditorMode::Attributes => {
            rated(&app.entities.attributes, context, &mut lines)?;
        }
        EditorMode::Abilities => abilities(app, context, &mut lines)?,
        EditorMode::Merits => merits(app, context, &mut lines)?,
        EditorMode::Charms => {
            powers(&app.entities.charms, context, &mut lines)?;
            let total = app.entities.charms.total_count(context.id())?;
            lines.push(format!(
                "Charms purchased: {total} (starting allowance {})",
                context.template.starting_charms
            ));
        }
        EditorMode::Spells => powers(&app.entities.spells, context, &mut lines)?,
        EditorMode::Evocations => powers(&app.entities.evocations, context, &mut lines)?,
    }
    Ok(lines.join("\n"))
}

fn template(app: &App, context: &SheetContext, lines: &mut Vec<String>) -> Result<(), SheetError> {
    let id = context.id();
    for name in StatFamily::Advantages.options() {
        let value = app
            .entities
            .advantages
            .calculated_value(id, &context.template, name)?;
        lines.push(format!("{name}: {value}"));
    }

    let pools = app.use_cases.character_sheet.resource_pools(id)?;
    if let (Some(personal), Some(peripheral)) = (pools.personal, pools.peripheral) {
        lines.push(format!("Personal Essence: {personal}"));
        lines.push(format!("Peripheral Essence: {peripheral}"));
    }

    for field in &context.template.extra_fields {
        let answer = context.record.extra_field(field.name).unwrap_or("");
        let note = match field.kind {
            FieldKind::Required if answer.is_empty() => " (required)",
            _ => "",
        };
        lines.push(format!("{}: {answer}{note}", field.name));
    }
    Ok(())
}

fn marks(stat: &RatedStat, template: &TemplateDefinition) -> String {
    let mut tags = Vec::new();
    if stat.is_favored() {
        tags.push(template.flag_label(FlagKind::Favored));
    }
    if stat.is_caste() {
        tags.push(template.flag_label(FlagKind::Caste));
    }
    if stat.supernal {
        tags.push(template.flag_label(FlagKind::Supernal));
    }
    if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    }
}

fn rated(
    handler: &RatedStats,
    context: &SheetContext,
    lines: &mut Vec<String>,
) -> Result<(), SheetError> {
    lines.push(format!("{}:", handler.family()));
    for stat in handler.all(context.id(), &context.template)? {
        lines.push(format!(
            "  {}: {}{}",
            stat.name,
            stat.value,
            marks(&stat, &context.template)
        ));
    }
    Ok(())
}

fn abilities(app: &App, context: &SheetContext, lines: &mut Vec<String>) -> Result<(), SheetError> {
    let id = context.id();
    rated(&app.entities.abilities, context, lines)?;

    let crafts = app.entities.crafts.all(id)?;
    if !crafts.is_empty() {
        lines.push("Crafts:".to_string());
        lines.extend(crafts.iter().map(|c| format!("  {}: {}", c.name, c.value)));
    }

    let styles: Vec<RatedStat> = app
        .entities
        .styles
        .all(id, &context.template)?
        .into_iter()
        .filter(|s| s.value > 0)
        .collect();
    if !styles.is_empty() {
        lines.push("Styles:".to_string());
        lines.extend(styles.iter().map(|s| format!("  {}: {}", s.name, s.value)));
    }

    let specialties = app.entities.abilities.specialties(id)?;
    if !specialties.is_empty() {
        lines.push("Specialties:".to_string());
        lines.extend(
            specialties
                .iter()
                .map(|s| format!("  {}/{}: {}", s.ability, s.name, s.value)),
        );
    }
    Ok(())
}

fn merits(app: &App, context: &SheetContext, lines: &mut Vec<String>) -> Result<(), SheetError> {
    let grouped = app.entities.merits.all_grouped_by_category(context.id())?;
    if grouped.is_empty() {
        lines.push("No Merits.".to_string());
    }
    for (category, merits) in grouped {
        lines.push(format!("{category}:"));
        lines.extend(merits.iter().map(|m| format!("  {}: {}", m.name, m.value)));
    }
    Ok(())
}

fn powers(handler: &Powers, context: &SheetContext, lines: &mut Vec<String>) -> Result<(), SheetError> {
    let grouped: GroupedPowers = handler.all_grouped_by_category(context.id())?;
    if grouped.is_empty() {
        lines.push(format!("No {}.", handler.family().family));
    }
    for (main, subs) in grouped {
        lines.push(format!("{main}:"));
        for (sub, powers) in subs {
            lines.push(format!("  {sub}:"));
            for power in powers {
                let count = if power.count > 1 {
                    format!(" (x{})", power.count)
                } else {
                    String::new()
                };
                lines.push(format!("    {}{count}", power.name));
            }
        }
    }
    Ok(())
}
