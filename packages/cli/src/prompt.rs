use std::path::PathBuf;

use admin::{Action, Confirm, FormState, Row};
use anyhow::{Context as _, Result};
use common::{Attachment, FieldKind, FieldValue, Record, RecordId};
use dialoguer::{Input, MultiSelect, Select};

/// Confirmation through a terminal yes/no prompt. A closed or non-interactive
/// terminal counts as "no".
///
/// The prompt blocks on stdin, so it runs through `block_in_place` and needs
/// the multi-threaded runtime `main` starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tokio::task::block_in_place(|| {
            dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or(false)
        })
    }
}

/// Let the user pick a row. `None` when cancelled or there is nothing to pick.
pub fn pick_row(rows: &[Row], prompt: &str) -> Result<Option<RecordId>> {
    if rows.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = rows
        .iter()
        .map(|row| {
            let primary = row
                .cells
                .first()
                .map(|c| c.value.to_line())
                .or_else(|| row.image_url.clone())
                .unwrap_or_default();
            match row.status {
                Some(status) => format!("#{}  {primary}  ({status})", row.id),
                None => format!("#{}  {primary}", row.id),
            }
        })
        .collect();

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(picked.map(|i| rows[i].id.clone()))
}

/// Ask for every field of the form, starting from its current values, and
/// return the actions that apply the answers.
pub async fn fill_form<R: Record>(form: &FormState) -> Result<Vec<Action<R>>> {
    let mut actions = Vec::new();

    for spec in form.descriptor().fields {
        match spec.kind {
            FieldKind::List => {
                let current = form
                    .value(spec.name)
                    .and_then(FieldValue::as_list)
                    .unwrap_or_default();
                if !current.is_empty() {
                    let mut remove = MultiSelect::new()
                        .with_prompt(format!("{}: select items to remove", spec.label))
                        .items(current)
                        .interact()?;
                    // Highest index first so earlier removals do not shift later ones.
                    remove.sort_unstable_by(|a, b| b.cmp(a));
                    actions.extend(
                        remove
                            .into_iter()
                            .map(|index| Action::remove_list_item(spec.name, index)),
                    );
                }
                loop {
                    let item: String = Input::new()
                        .with_prompt(format!("Add to {} (blank to finish)", spec.label))
                        .allow_empty(true)
                        .interact_text()?;
                    if item.trim().is_empty() {
                        break;
                    }
                    actions.push(Action::add_list_item(spec.name, item));
                }
            }
            FieldKind::Text | FieldKind::LongText | FieldKind::Slug => {
                let current = form
                    .value(spec.name)
                    .and_then(FieldValue::as_text)
                    .unwrap_or_default();
                let value: String = Input::new()
                    .with_prompt(spec.label)
                    .with_initial_text(current)
                    .allow_empty(!spec.required)
                    .interact_text()?;
                actions.push(Action::set_field(spec.name, value));
            }
        }
    }

    let image_prompt = if form.is_editing() {
        "Image path (blank keeps the current image)"
    } else {
        "Image path"
    };
    let path: String = Input::new()
        .with_prompt(image_prompt)
        .allow_empty(true)
        .interact_text()?;
    if !path.trim().is_empty() {
        actions.push(Action::Attach(read_image(PathBuf::from(path.trim())).await?));
    }

    Ok(actions)
}

pub async fn read_image(path: PathBuf) -> Result<Attachment> {
    let file = Attachment::from_path(&path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    if !file.is_image() {
        tracing::warn!(path = %path.display(), mime = %file.mime, "File does not look like an image");
    }
    Ok(file)
}
