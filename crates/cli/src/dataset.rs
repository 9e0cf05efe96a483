//! Dataset loading: headerless CSV rows of d coordinates plus a label.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::DVector;
use polars::prelude::*;

use hullcluster::prelude::{Label, LabeledPoint, PointStore};

/// Load a line-delimited dataset file: each record is d real coordinates
/// followed by one integer label.
///
/// Fully empty records (a trailing blank line) are dropped; a record with
/// only some fields missing is a load error. Coordinates must have at least
/// two components.
pub fn load_dataset(path: &Path) -> Result<(PointStore, Vec<LabeledPoint>)> {
    // An entirely empty file is the empty dataset, not a parse error: the
    // clustering loop emits an empty cluster sequence for it.
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    if raw.lines().all(|line| line.trim().is_empty()) {
        return Ok((PointStore::new(0), Vec::new()));
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading dataset {}", path.display()))?;

    if df.width() < 3 {
        bail!(
            "dataset {} needs at least 2 coordinate columns and a label, got {} columns",
            path.display(),
            df.width()
        );
    }
    let dim = df.width() - 1;

    let mut coord_cols = Vec::with_capacity(dim);
    for series in &df.get_columns()[..dim] {
        let col = series
            .cast(&DataType::Float64)
            .with_context(|| format!("column {} is not numeric", series.name()))?;
        coord_cols.push(col);
    }
    let labels = df.get_columns()[dim]
        .cast(&DataType::Int64)
        .context("label column is not an integer")?;
    let labels = labels.i64()?;

    let mut store = PointStore::new(dim);
    let mut dataset = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut coord = Vec::with_capacity(dim);
        for col in &coord_cols {
            if let Some(v) = col.f64()?.get(row) {
                coord.push(v);
            }
        }
        let label = labels.get(row);
        if coord.is_empty() && label.is_none() {
            // Trailing blank record.
            continue;
        }
        let Some(label) = label else {
            bail!("record {} of {} is incomplete", row + 1, path.display());
        };
        if coord.len() != dim {
            bail!("record {} of {} is incomplete", row + 1, path.display());
        }
        let id = store.intern(DVector::from_vec(coord));
        dataset.push(LabeledPoint {
            id,
            label: Label(label),
        });
    }
    Ok((store, dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_csv("0.0,0.0,0\n1.5,0.25,0\n10.0,10.0,1\n");
        let (store, dataset) = load_dataset(file.path()).unwrap();
        assert_eq!(store.dim(), 2);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset[0].label, Label(0));
        assert_eq!(dataset[2].label, Label(1));
        assert_eq!(store.coord(dataset[1].id)[0], 1.5);
        assert_eq!(store.coord(dataset[1].id)[1], 0.25);
    }

    #[test]
    fn equal_coordinates_share_an_id() {
        let file = write_csv("1.0,2.0,0\n1.0,2.0,1\n");
        let (_, dataset) = load_dataset(file.path()).unwrap();
        assert_eq!(dataset[0].id, dataset[1].id);
    }

    #[test]
    fn tolerates_trailing_blank_line() {
        let file = write_csv("0.0,0.0,0\n1.0,0.0,0\n\n");
        let (_, dataset) = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn empty_file_is_the_empty_dataset() {
        let file = write_csv("");
        let (store, dataset) = load_dataset(file.path()).unwrap();
        assert!(store.is_empty());
        assert!(dataset.is_empty());
    }

    #[test]
    fn rejects_single_coordinate_datasets() {
        let file = write_csv("1.0,0\n2.0,1\n");
        assert!(load_dataset(file.path()).is_err());
    }

    #[test]
    fn three_dimensional_rows() {
        let file = write_csv("0.0,0.0,0.0,7\n1.0,0.0,0.0,7\n");
        let (store, dataset) = load_dataset(file.path()).unwrap();
        assert_eq!(store.dim(), 3);
        assert_eq!(dataset[0].label, Label(7));
    }
}
