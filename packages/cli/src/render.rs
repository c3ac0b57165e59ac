//! Plain terminal rendering of rows, notices and the nav bar.

use admin::{NavItem, Navigation, Notice, NoticeLevel, Row, RowAction, ViewState, columns};
use common::Record;
use console::{Alignment, measure_text_width, pad_str, style};

const MIN_COLUMN: usize = 6;

pub fn notice(notice: &Notice) -> String {
    let stamp = notice.raised_at.format("%H:%M:%S");
    match notice.level {
        NoticeLevel::Success => format!("{} {} {}", style("✔").green(), notice.message, style(stamp).dim()),
        NoticeLevel::Error => format!("{} {} {}", style("✖").red(), style(&notice.message).red(), style(stamp).dim()),
    }
}

fn action_label(action: &RowAction) -> &'static str {
    match action {
        RowAction::Edit => "Edit",
        RowAction::Toggle { label } => label,
        RowAction::Delete => "Delete",
    }
}

fn status_cell(row: &Row) -> String {
    match (row.status, row.active) {
        (Some(label), Some(true)) => style(label).green().to_string(),
        (Some(label), _) => style(label).yellow().to_string(),
        (None, _) => String::new(),
    }
}

/// Lay out the records as a table no wider than `width` columns.
pub fn table<R: Record>(rows: &[Row], width: usize) -> Vec<String> {
    let descriptor = R::descriptor();

    let mut headers: Vec<&str> = Vec::new();
    if descriptor.show_id {
        headers.push("ID");
    }
    headers.push("Image");
    headers.extend(columns::<R>());
    if descriptor.status.is_some() {
        headers.push("Status");
    }
    headers.push("Actions");

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(headers.len());
            if descriptor.show_id {
                cells.push(row.id.to_string());
            }
            cells.push(row.image_url.clone().unwrap_or_else(|| "-".into()));
            cells.extend(row.cells.iter().map(|c| c.value.to_line()));
            if descriptor.status.is_some() {
                cells.push(status_cell(row));
            }
            cells.push(
                row.actions
                    .iter()
                    .map(action_label)
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
            cells
        })
        .collect();

    let gaps = 2 * headers.len().saturating_sub(1);
    let cap = (width.saturating_sub(gaps) / headers.len().max(1)).max(MIN_COLUMN);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            body.iter()
                .map(|cells| measure_text_width(&cells[i]))
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(MIN_COLUMN)
                .min(cap)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad_str(cell, *w, Alignment::Left, Some("…")).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| style(h).bold().to_string()).collect();
    let mut lines = vec![line(&header_cells)];
    lines.push("─".repeat(widths.iter().sum::<usize>() + gaps));
    lines.extend(body.iter().map(|cells| line(cells)));
    lines
}

/// Title, counter, notice and table of one view.
pub fn page<R: Record>(state: &ViewState<R>, width: usize) -> Vec<String> {
    let descriptor = state.descriptor();
    let mut lines = vec![
        style(descriptor.title).bold().underlined().to_string(),
        state.summary(),
    ];
    if let Some(n) = state.notice() {
        lines.push(notice(n));
    }
    if let Some(editing) = state.form().editing() {
        lines.push(style(format!("Editing {} {editing}", descriptor.singular)).cyan().to_string());
    }
    if let Some(preview) = state.preview() {
        lines.push(style(format!("Pending image: {preview}")).dim().to_string());
    }
    lines.push(String::new());

    if !state.list().is_loaded() {
        lines.push(style("Loading…").dim().to_string());
    } else if state.list().is_empty() {
        lines.push(format!("No {} yet.", descriptor.kind));
    } else {
        lines.extend(table::<R>(&state.rows(), width));
    }
    lines
}

fn nav_item(item: &NavItem) -> String {
    if item.active {
        style(format!("[{}]", item.route.name)).bold().cyan().to_string()
    } else {
        format!(" {} ", item.route.name)
    }
}

/// Nav bar: the entries inline, or a menu toggle on narrow terminals.
pub fn nav(navigation: &Navigation) -> Vec<String> {
    let brand = style("SLT Admin").bold().to_string();
    let items: Vec<String> = navigation.items().iter().map(nav_item).collect();

    if !navigation.is_collapsed() {
        return vec![format!("{brand}  {}", items.join(" "))];
    }

    let mut lines = vec![format!("{brand}  ☰ Menu")];
    if navigation.is_menu_open() {
        lines.extend(items.into_iter().map(|item| format!("  {item}")));
    }
    lines
}
