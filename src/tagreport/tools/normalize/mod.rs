use crate::tagreport::tools::model::{DisplayRow, Record, Tag};

/// Separator placed between tag labels in the flattened display string.
pub const TAG_SEPARATOR: &str = ", ";
/// Separator placed between a group name and the tag name inside one label.
pub const GROUP_SEPARATOR: &str = " - ";

/// Renders a single tag as its display label. Grouped tags are prefixed with
/// the group name.
pub fn tag_label(tag: &Tag) -> String {
    match &tag.group {
        Some(group) => format!("{}{GROUP_SEPARATOR}{}", group.name, tag.name),
        None => tag.name.clone(),
    }
}

/// Flattens the provided records into display rows, one row per record, in
/// input order.
///
/// Labels are joined verbatim; a name that itself contains a separator is not
/// escaped.
pub fn normalize(records: &[Record]) -> Vec<DisplayRow> {
    records.iter().map(display_row).collect()
}

fn display_row(record: &Record) -> DisplayRow {
    let labels: Vec<String> = record.tags.iter().map(tag_label).collect();

    DisplayRow {
        id: record.id.clone(),
        name: record.name.clone(),
        tag_count: record.tags.len(),
        tags: labels.join(TAG_SEPARATOR),
    }
}
