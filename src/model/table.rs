use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use serde_json::Value;

use crate::{
    error::{AggregationError, Error, Result},
    model::movie::MovieRecord,
};

/// A record that could not be read as a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position inside the column; `None` when the column itself is not a list.
    pub position: Option<usize>,
    pub value: String,
    pub reason: String,
}

/// One actor's filmography. Empty slots (`null` in the document) are kept so
/// that record positions match the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorColumn {
    /// `"actor name, show name, show genres"`.
    pub label: String,
    pub movies: Vec<Option<MovieRecord>>,
    /// First malformed record of the column. Its slot in `movies` is `None`
    /// and it is not written back on save.
    pub rejected: Option<RejectedRecord>,
}

impl ActorColumn {
    pub fn new(label: impl Into<String>, movies: Vec<Option<MovieRecord>>) -> Self {
        ActorColumn {
            label: label.into(),
            movies,
            rejected: None,
        }
    }

    /// Reads a column record by record so one bad entry only taints its own column.
    pub fn from_json(label: String, value: Value) -> Self {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return ActorColumn {
                    label,
                    movies: vec![],
                    rejected: Some(RejectedRecord {
                        position: None,
                        value: other.to_string(),
                        reason: "expected a list of movie records".to_string(),
                    }),
                }
            }
        };

        let mut movies = Vec::with_capacity(items.len());
        let mut rejected = None;
        for (position, item) in items.iter().enumerate() {
            match Option::<MovieRecord>::deserialize(item) {
                Ok(movie) => movies.push(movie),
                Err(e) => {
                    movies.push(None);
                    rejected.get_or_insert_with(|| RejectedRecord {
                        position: Some(position),
                        value: item.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        ActorColumn {
            label,
            movies,
            rejected,
        }
    }

    /// Fails with the column's first malformed record, if it has one.
    pub fn ensure_well_formed(&self, index: usize) -> std::result::Result<(), AggregationError> {
        match &self.rejected {
            None => Ok(()),
            Some(rejected) => Err(AggregationError {
                column: index,
                field: "record",
                value: rejected.value.clone(),
                reason: match rejected.position {
                    Some(position) => format!("record {}: {}", position, rejected.reason),
                    None => rejected.reason.clone(),
                },
            }),
        }
    }

    /// First comma-separated segment of the label.
    pub fn display_name(&self) -> &str {
        self.label.split(',').next().unwrap_or_default()
    }

    /// Records that are actually present, in column order.
    pub fn records(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter().flatten()
    }
}

/// All actor columns, indexed by their position in the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<ActorColumn>,
}

impl Table {
    pub fn new(columns: Vec<ActorColumn>) -> Self {
        Table { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn push(&mut self, column: ActorColumn) {
        self.columns.push(column);
    }

    pub fn columns(&self) -> &[ActorColumn] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Result<&ActorColumn> {
        self.columns.get(index).ok_or(Error::ColumnOutOfRange {
            index,
            len: self.columns.len(),
        })
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.label, &column.movies)?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = Table;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from actor label to a list of movie records")
    }

    // Keys are read in document order, which fixes the column indices.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Table, A::Error> {
        let mut columns = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, value)) = access.next_entry::<String, Value>()? {
            let column = ActorColumn::from_json(label, value);
            if let Some(rejected) = &column.rejected {
                log::warn!(
                    "Column {} ({}) has a malformed record: {}",
                    columns.len(),
                    column.display_name(),
                    rejected.reason
                );
            }
            columns.push(column);
        }
        Ok(Table { columns })
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}
