use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use gde_core::errors::{ErrorInfo, GdeError};
use gde_core::DesignVector;

/// Default results filename for a run, carrying the sampling parameters.
pub fn default_results_filename(temperature: f64, proposal_std: f64) -> String {
    format!("T{temperature}-STD{proposal_std}.csv")
}

/// Saves a design/cost pool as a CSV table with `designs` and `costs`
/// columns. Each design is serialized as the JSON encoding of its component
/// sequence.
pub fn save_results(
    designs: &[DesignVector],
    costs: &[f64],
    path: &Path,
) -> Result<(), GdeError> {
    save_results_with(designs, costs, &[], path)
}

/// Like [`save_results`] but with additional caller-supplied columns, each a
/// name paired with one value per row.
pub fn save_results_with(
    designs: &[DesignVector],
    costs: &[f64],
    extra: &[(&str, &[String])],
    path: &Path,
) -> Result<(), GdeError> {
    if designs.is_empty() {
        return Err(GdeError::Store(
            ErrorInfo::new("empty-result-set", "nothing to save")
                .with_context("path", path.display().to_string())
                .with_hint("run generation first"),
        ));
    }
    if designs.len() != costs.len() {
        return Err(GdeError::Store(
            ErrorInfo::new("results-misaligned", "designs and costs differ in length")
                .with_context("designs", designs.len().to_string())
                .with_context("costs", costs.len().to_string()),
        ));
    }
    for (name, values) in extra {
        if values.len() != designs.len() {
            return Err(GdeError::Store(
                ErrorInfo::new("extra-column-misaligned", "extra column length mismatch")
                    .with_context("column", name.to_string())
                    .with_context("expected", designs.len().to_string())
                    .with_context("actual", values.len().to_string()),
            ));
        }
    }

    ensure_parent(path)?;
    let file = File::create(path).map_err(|err| {
        GdeError::Store(
            ErrorInfo::new("results-create", "failed to create results file")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file));

    let mut header = vec!["designs".to_string(), "costs".to_string()];
    header.extend(extra.iter().map(|(name, _)| name.to_string()));
    writer
        .write_record(&header)
        .map_err(|err| wrap_csv("results-write-header", err))?;

    for (row, (design, cost)) in designs.iter().zip(costs.iter()).enumerate() {
        let encoded = serde_json::to_string(design).map_err(|err| {
            GdeError::Serde(
                ErrorInfo::new("design-encode", err.to_string())
                    .with_context("row", row.to_string()),
            )
        })?;
        let mut record = vec![encoded, cost.to_string()];
        record.extend(extra.iter().map(|(_, values)| values[row].clone()));
        writer
            .write_record(&record)
            .map_err(|err| wrap_csv("results-write-row", err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv("results-flush", err.into()))?;
    Ok(())
}

/// Loads a results table written by [`save_results`] back into aligned
/// design and cost vectors.
pub fn load_results(path: &Path) -> Result<(Vec<DesignVector>, Vec<f64>), GdeError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|err| wrap_csv("results-open", err))?;

    let headers = reader
        .headers()
        .map_err(|err| wrap_csv("results-headers", err))?
        .clone();
    let design_col = column_index(&headers, "designs", path)?;
    let cost_col = column_index(&headers, "costs", path)?;

    let mut designs = Vec::new();
    let mut costs = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| wrap_csv("results-read-row", err))?;
        let design_field = field(&record, design_col, row, "designs")?;
        let cost_field = field(&record, cost_col, row, "costs")?;
        let design: DesignVector = serde_json::from_str(design_field).map_err(|err| {
            GdeError::Serde(
                ErrorInfo::new("design-decode", err.to_string())
                    .with_context("row", row.to_string()),
            )
        })?;
        let cost: f64 = cost_field.parse().map_err(|_| {
            GdeError::Store(
                ErrorInfo::new("cost-decode", "cost field is not a number")
                    .with_context("row", row.to_string())
                    .with_context("value", cost_field.to_string()),
            )
        })?;
        designs.push(design);
        costs.push(cost);
    }
    Ok((designs, costs))
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize, GdeError> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        GdeError::Store(
            ErrorInfo::new("results-missing-column", "required column not found")
                .with_context("column", name.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    row: usize,
    name: &str,
) -> Result<&'a str, GdeError> {
    record.get(index).ok_or_else(|| {
        GdeError::Store(
            ErrorInfo::new("results-short-row", "row is missing a field")
                .with_context("row", row.to_string())
                .with_context("column", name.to_string()),
        )
    })
}

fn ensure_parent(path: &Path) -> Result<(), GdeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                GdeError::Store(
                    ErrorInfo::new("results-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
    }
    Ok(())
}

fn wrap_csv(code: &str, err: csv::Error) -> GdeError {
    GdeError::Store(ErrorInfo::new(code, err.to_string()))
}
