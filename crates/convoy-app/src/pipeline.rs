//! Pipeline orchestration
//!
//! Sequences the run from the input file's name: spreadsheet inputs
//! are converted to CSV first, CSV inputs are cleaned and audited,
//! checked CSV inputs go straight to storage, and store files skip
//! straight to export. Every stage failure aborts the run; nothing
//! is retried.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use convoy_domain::repository::{ConvoyRepository, ScoreFilter};
use convoy_domain::service::{apply_scores, clean_records, count_corrections};
use convoy_infra::persistence::SqliteConvoyRepository;
use convoy_infra::{export, records_csv, spreadsheet};
use convoy_types::{Error, Result};

use crate::config::Config;

/// Input classification, by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    /// `.xlsx` - convert, clean, store, export
    Spreadsheet,
    /// `.csv` - clean, store, export
    Csv,
    /// `[CHECKED].csv` - already cleaned; store, export
    CheckedCsv,
    /// `.s3db` - export only
    Database,
}

impl InputKind {
    fn classify(input: &Path) -> Result<Self> {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.ends_with("[CHECKED].csv") {
            return Ok(InputKind::CheckedCsv);
        }
        match input.extension().and_then(|e| e.to_str()) {
            Some("xlsx") => Ok(InputKind::Spreadsheet),
            Some("csv") => Ok(InputKind::Csv),
            Some("s3db") => Ok(InputKind::Database),
            _ => Err(Error::UnsupportedExtension(name)),
        }
    }
}

/// Paths of every artifact a run can produce, all derived from the
/// input base name.
#[derive(Debug, Clone, Serialize)]
pub struct Artifacts {
    pub csv: PathBuf,
    pub checked: PathBuf,
    pub database: PathBuf,
    pub json: PathBuf,
    pub xml: PathBuf,
}

impl Artifacts {
    fn for_input(input: &Path) -> Self {
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let base = stem.strip_suffix("[CHECKED]").unwrap_or(&stem).to_string();

        Self {
            csv: dir.join(format!("{base}.csv")),
            checked: dir.join(format!("{base}[CHECKED].csv")),
            database: dir.join(format!("{base}.s3db")),
            json: dir.join(format!("{base}.json")),
            xml: dir.join(format!("{base}.xml")),
        }
    }
}

/// Per-stage counts of a completed run. Stages the input class
/// skipped stay `None`.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub converted: Option<usize>,
    pub corrected: Option<usize>,
    pub inserted: Option<usize>,
    pub json_saved: usize,
    pub xml_saved: Option<usize>,
    pub artifacts: Artifacts,
}

/// Run the pipeline for one input file
pub fn run(input: &Path, config: &Config) -> Result<PipelineReport> {
    if !input.exists() {
        return Err(Error::FileNotFound(input.display().to_string()));
    }
    let kind = InputKind::classify(input)?;
    let artifacts = Artifacts::for_input(input);
    info!("processing {} as {:?}", input.display(), kind);

    let mut converted = None;
    let mut corrected = None;
    let mut inserted = None;

    if kind == InputKind::Spreadsheet {
        let rows = spreadsheet::convert_to_csv(input, &artifacts.csv, &config.sheet_name)?;
        info!("converted {} rows to {}", rows, artifacts.csv.display());
        converted = Some(rows);
    }

    if matches!(kind, InputKind::Spreadsheet | InputKind::Csv) {
        let original = records_csv::read_records(&artifacts.csv)?;
        let cleaned = clean_records(&original);
        let cells = count_corrections(&original, &cleaned)?;
        records_csv::write_records(&artifacts.checked, &cleaned)?;
        info!("corrected {} cells into {}", cells, artifacts.checked.display());
        corrected = Some(cells);
    }

    if kind != InputKind::Database {
        let records = records_csv::read_records(&artifacts.checked)?;
        let mut vehicles = records
            .iter()
            .enumerate()
            .map(|(index, record)| record.to_vehicle(index + 2))
            .collect::<Result<Vec<_>>>()?;
        if config.scoring {
            apply_scores(&mut vehicles)?;
        }

        let mut repo = SqliteConvoyRepository::open(&artifacts.database, config.scoring)?;
        repo.create_table()?;
        let rows = repo.append(&vehicles)?;
        info!("inserted {} records into {}", rows, artifacts.database.display());
        inserted = Some(rows);
        // The connection drops here; export opens its own.
    }

    let repo = SqliteConvoyRepository::open(&artifacts.database, config.scoring)?;
    let (json_rows, xml_rows) = if config.scoring {
        (
            repo.fetch(ScoreFilter::Above(3))?,
            Some(repo.fetch(ScoreFilter::AtMost(3))?),
        )
    } else {
        (repo.fetch(ScoreFilter::All)?, None)
    };

    let json_saved = export::write_json(&artifacts.json, &json_rows)?;
    info!("saved {} vehicles into {}", json_saved, artifacts.json.display());
    let xml_saved = match xml_rows {
        Some(rows) => {
            let saved = export::write_xml(&artifacts.xml, &rows)?;
            info!("saved {} vehicles into {}", saved, artifacts.xml.display());
            Some(saved)
        }
        None => None,
    };

    Ok(PipelineReport {
        converted,
        corrected,
        inserted,
        json_saved,
        xml_saved,
        artifacts,
    })
}
