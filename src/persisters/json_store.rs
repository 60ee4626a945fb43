use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    error::{Error, Result},
    model::table::Table,
};

pub struct JsonStore {}

impl JsonStore {
    pub fn load_table(file_name: impl AsRef<Path>) -> Result<Table> {
        let path = file_name.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let table = JsonStore::read_table(BufReader::new(file))?;
        log::info!(
            "Loaded {} actors from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn read_table(reader: impl Read) -> Result<Table> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save_table(table: &Table, file_name: impl AsRef<Path>) -> Result<()> {
        let path = file_name.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        JsonStore::write_table(table, &mut writer)?;
        writer.flush().map_err(|e| Error::io(path, e))
    }

    pub fn write_table(table: &Table, writer: impl Write) -> Result<()> {
        Ok(serde_json::to_writer(writer, table)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{movie::MovieRecord, table::ActorColumn};

    #[test]
    fn saved_table_loads_back_in_the_same_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imdb.json");
        let table = Table::new(vec![
            ActorColumn::new(
                "Sabrina Carpenter, Girl Meets World, Comedy",
                vec![
                    Some(MovieRecord {
                        title: Some("Work It".to_string()),
                        year_range: Some("2020".to_string()),
                        genres: Some(vec!["Comedy".to_string(), "Music".to_string()]),
                        rating: Some("6.1".to_string()),
                        ..Default::default()
                    }),
                    None,
                ],
            ),
            ActorColumn::new("Rowan Blanchard, Girl Meets World, Comedy", vec![]),
        ]);

        JsonStore::save_table(&table, &path).unwrap();

        assert_eq!(JsonStore::load_table(&path).unwrap(), table);
    }

    #[test]
    fn escaped_en_dash_is_read() {
        let table = JsonStore::read_table(
            r#"{"a": [["Jessie", "2011\u20132015", null, null, "6.4"]]}"#.as_bytes(),
        )
        .unwrap();

        let movie = table.columns()[0].records().next().unwrap();
        assert_eq!(movie.year_range.as_deref(), Some("2011–2015"));
    }

    #[test]
    fn missing_file_names_the_path() {
        match JsonStore::load_table("does/not/exist.json") {
            Err(Error::Io { path, .. }) => assert_eq!(path, "does/not/exist.json"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        assert!(matches!(
            JsonStore::read_table("[1, 2]".as_bytes()),
            Err(Error::Json(_))
        ));
    }
}
