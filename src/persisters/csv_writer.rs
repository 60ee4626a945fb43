use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::Writer;

use crate::{
    charts::{Chart, ChartCategory},
    error::{Error, Result},
};

/// Writes every actor's chart of one category as `<output_dir>/<category>/<index>.csv`,
/// plus a `titles.csv` listing each chart's title and y-axis limit.
pub struct CsvWriter {
    dir: PathBuf,
    titles: Vec<(usize, String, Option<f64>)>,
}

impl CsvWriter {
    pub fn new(output_dir: impl AsRef<Path>, category: ChartCategory) -> Result<Self> {
        let dir = output_dir.as_ref().join(category.dir_name());
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        Ok(CsvWriter {
            dir,
            titles: vec![],
        })
    }

    pub fn save_chart(&mut self, chart: &Chart, index: usize) -> Result<PathBuf> {
        let file_name = self.dir.join(format!("{}.csv", index));
        let mut wrt = Writer::from_path(&file_name)?;

        wrt.write_record(chart.csv_titles())?;
        for (x, y) in chart.points.iter() {
            wrt.write_record([x, y])?;
        }
        wrt.flush().map_err(|e| Error::io(&file_name, e))?;

        log::debug!("Saved \"{}\" to {}", chart.title, file_name.display());
        self.titles.push((index, chart.title.clone(), chart.y_max));

        Ok(file_name)
    }

    /// Writes `titles.csv` and returns the category directory.
    pub fn finish(self) -> Result<PathBuf> {
        let file_name = self.dir.join("titles.csv");
        let mut wrt = Writer::from_path(&file_name)?;

        wrt.write_record(["Index", "Title", "Y max"])?;
        for (index, title, y_max) in self.titles.iter() {
            wrt.write_record([
                index.to_string(),
                title.clone(),
                y_max.map(|y| y.to_string()).unwrap_or_default(),
            ])?;
        }
        wrt.flush().map_err(|e| Error::io(&file_name, e))?;

        Ok(self.dir)
    }
}
