use serde::{Deserialize, Serialize};

/// Named group a tag may be scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Display name of the group.
    pub name: String,
}

/// Label attached to a record, optionally scoped to a [`TagGroup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Display name of the tag.
    pub name: String,
    /// Group the tag belongs to, at most one per tag.
    #[serde(default, rename = "tagGroup")]
    pub group: Option<TagGroup>,
}

/// A business entity delivered by the host data feed, e.g. an Application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier assigned by the host. Kept as a plain string for ease of
    /// interoperability with Excel.
    pub id: String,
    /// Display name of the record.
    pub name: String,
    /// Tags attached to the record, in feed order. Absent in the payload means
    /// no tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Flattened, export-ready projection of a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Identifier carried over from the source record.
    pub id: String,
    /// Display name carried over from the source record.
    pub name: String,
    /// Number of tags the source record had before flattening.
    #[serde(rename = "tagCount")]
    pub tag_count: usize,
    /// Human-readable join of all tag labels, in original order.
    pub tags: String,
}

impl DisplayRow {
    /// Looks up the cell value bound to a column key.
    pub fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some(CellValue::Text(self.id.clone())),
            "name" => Some(CellValue::Text(self.name.clone())),
            "tagCount" => Some(CellValue::Number(self.tag_count as f64)),
            "tags" => Some(CellValue::Text(self.tags.clone())),
            _ => None,
        }
    }
}

/// Represents a scalar cell value in the exported table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    /// Plain text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
}

/// Declaration of one output column: binding key, header text, and display
/// width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Field name the column binds to on each [`DisplayRow`].
    pub key: String,
    /// Header text written into the first sheet row.
    pub header: String,
    /// Column display width.
    pub width: f64,
}

impl ColumnSpec {
    /// Creates a new column declaration.
    pub fn new(key: impl Into<String>, header: impl Into<String>, width: f64) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width,
        }
    }
}

/// Column layout used for the Application inventory export.
pub fn application_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID", 40.0),
        ColumnSpec::new("name", "Name", 60.0),
        ColumnSpec::new("tagCount", "Tag Count", 10.0),
        ColumnSpec::new("tags", "Tags", 100.0),
    ]
}
