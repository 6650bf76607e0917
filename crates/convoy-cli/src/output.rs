//! Run summary output
//!
//! Table format prints one audit line per completed stage, with the
//! grammar following the count ("1 line was", "3 cells were").

use convoy_app::pipeline::PipelineReport;
use convoy_types::{OutputFormat, Result};

pub fn print_report(format: OutputFormat, report: &PipelineReport) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if let Some(rows) = report.converted {
        println!(
            "{} added to {}",
            counted(rows, "line"),
            report.artifacts.csv.display()
        );
    }
    if let Some(cells) = report.corrected {
        println!(
            "{} corrected in {}",
            counted(cells, "cell"),
            report.artifacts.checked.display()
        );
    }
    if let Some(rows) = report.inserted {
        println!(
            "{} inserted into {}",
            counted(rows, "record"),
            report.artifacts.database.display()
        );
    }
    println!(
        "{} saved into {}",
        counted(report.json_saved, "vehicle"),
        report.artifacts.json.display()
    );
    if let Some(rows) = report.xml_saved {
        println!(
            "{} saved into {}",
            counted(rows, "vehicle"),
            report.artifacts.xml.display()
        );
    }
    Ok(())
}

/// "1 line was" / "3 lines were"
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun} was")
    } else {
        format!("{count} {noun}s were")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_singular() {
        assert_eq!(counted(1, "cell"), "1 cell was");
    }

    #[test]
    fn test_counted_plural() {
        assert_eq!(counted(0, "record"), "0 records were");
        assert_eq!(counted(3, "line"), "3 lines were");
    }
}
