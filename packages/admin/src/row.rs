use common::{FieldValue, Record, RecordId};

/// Rendered value of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    List(Vec<String>),
}

impl CellValue {
    /// Single-line rendering; list items are joined with `", "`.
    pub fn to_line(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: &'static str,
    pub value: CellValue,
}

/// Actions enabled on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    /// Flip visibility; the label reflects the current state ("Hide"/"Show").
    Toggle { label: &'static str },
    Delete,
}

/// One table row of a resource view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RecordId,
    pub image_url: Option<String>,
    pub cells: Vec<Cell>,
    pub active: Option<bool>,
    pub status: Option<&'static str>,
    pub actions: Vec<RowAction>,
}

/// Table headers, in the order [`render`] fills cells. Id, image, status
/// and actions are rendered separately.
pub fn columns<R: Record>() -> Vec<&'static str> {
    R::descriptor()
        .fields
        .iter()
        .filter_map(|f| f.column)
        .collect()
}

pub fn render<R: Record>(record: &R) -> Row {
    let descriptor = R::descriptor();

    let cells = descriptor
        .fields
        .iter()
        .filter_map(|spec| {
            let column = spec.column?;
            let value = match record.field(spec.name)? {
                FieldValue::Text(text) => CellValue::Text(match spec.truncate {
                    Some(max) => truncate(&text, max),
                    None => text,
                }),
                FieldValue::List(items) => CellValue::List(items),
            };
            Some(Cell { column, value })
        })
        .collect();

    let active = record.is_active().filter(|_| descriptor.has_toggle());
    let status = descriptor.status.zip(active).map(|(labels, a)| labels.status(a));

    let mut actions = Vec::new();
    if descriptor.has_edit {
        actions.push(RowAction::Edit);
    }
    if let (Some(labels), Some(active)) = (descriptor.status, active) {
        actions.push(RowAction::Toggle {
            label: labels.toggle_action(active),
        });
    }
    actions.push(RowAction::Delete);

    Row {
        id: record.id().clone(),
        image_url: record.image_url().map(str::to_string),
        cells,
        active,
        status,
        actions,
    }
}

/// Cut `text` to `max` characters and mark the cut with `"..."`.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Banner, Blog, Service};

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 80), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn test_blog_row() {
        let blog = Blog {
            id: RecordId::from(3),
            title: "Intro".into(),
            slug: "intro".into(),
            description: "x".repeat(100),
            full_content: "body".into(),
            image_url: None,
            is_active: false,
        };
        let row = render(&blog);

        assert_eq!(columns::<Blog>(), vec!["Title", "Description"]);
        assert_eq!(row.cells.len(), 2);
        assert_eq!(
            row.cells[1].value,
            CellValue::Text(format!("{}...", "x".repeat(80)))
        );
        assert_eq!(row.status, Some("Draft"));
        assert_eq!(
            row.actions,
            vec![
                RowAction::Edit,
                RowAction::Toggle { label: "Show" },
                RowAction::Delete
            ]
        );
        assert_eq!(row.image_url, None);
    }

    #[test]
    fn test_service_row_lists_points_without_toggle() {
        let service = Service {
            id: RecordId::from(1),
            title: "Freight".into(),
            description: "Door to door".into(),
            points: vec!["Fast".into(), "Safe".into()],
            image_url: Some("https://cdn/s.png".into()),
        };
        let row = render(&service);

        assert_eq!(
            row.cells[2].value,
            CellValue::List(vec!["Fast".into(), "Safe".into()])
        );
        assert_eq!(row.cells[2].value.to_line(), "Fast, Safe");
        assert_eq!(row.status, None);
        assert_eq!(row.actions, vec![RowAction::Delete]);
    }

    #[test]
    fn test_banner_row_status() {
        let banner = Banner {
            id: RecordId::from(5),
            image_url: "https://cdn/b.png".into(),
            is_active: true,
        };
        let row = render(&banner);

        assert!(row.cells.is_empty());
        assert_eq!(row.status, Some("Live"));
        assert_eq!(row.active, Some(true));
        assert_eq!(
            row.actions,
            vec![RowAction::Toggle { label: "Hide" }, RowAction::Delete]
        );
    }
}
