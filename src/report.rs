use std::io::Write;

use anyhow::{Context, Result};

use crate::analysis::AnalysisResult;

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

/// Render the result as an aligned text table plus the mean line:
///
/// ```text
/// Sample    Equation          R²
/// Amostra1  y = 2.00x + 0.10  0.9987
/// Amostra2  N/A               N/A
///
/// Mean R²: 0.4994
/// ```
pub fn write_text(out: &mut impl Write, result: &AnalysisResult) -> Result<()> {
    let rows: Vec<(String, String, String)> = result
        .records
        .iter()
        .map(|r| (r.sample_id.clone(), r.equation(), r.r_squared_display()))
        .collect();

    let id_width = column_width("Sample", rows.iter().map(|r| r.0.as_str()));
    let eq_width = column_width("Equation", rows.iter().map(|r| r.1.as_str()));

    writeln!(out, "{:<id_width$}  {:<eq_width$}  R²", "Sample", "Equation")?;
    for (id, eq, r2) in &rows {
        writeln!(out, "{id:<id_width$}  {eq:<eq_width$}  {r2}")?;
    }
    writeln!(out)?;
    writeln!(out, "Mean R²: {:.4}", result.mean_r_squared)?;
    Ok(())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// JSON report
// ---------------------------------------------------------------------------

/// Render the result as pretty-printed JSON for machine consumption.
/// Non-finite means (no samples fitted) serialize as `null`.
pub fn write_json(out: &mut impl Write, result: &AnalysisResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result).context("serializing result")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LinearModel, SampleOutcome, SampleRecord};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            records: vec![
                SampleRecord {
                    sample_id: "Amostra1".into(),
                    outcome: SampleOutcome::Fitted {
                        model: LinearModel {
                            slope: 2.0,
                            intercept: 0.1,
                        },
                        r_squared: 0.9987,
                    },
                },
                SampleRecord {
                    sample_id: "Amostra2".into(),
                    outcome: SampleOutcome::Missing,
                },
            ],
            mean_r_squared: 0.4994,
        }
    }

    #[test]
    fn text_report_layout() {
        let mut buf = Vec::new();
        write_text(&mut buf, &sample_result()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sample    Equation          R²");
        assert_eq!(lines[1], "Amostra1  y = 2.00x + 0.10  0.9987");
        assert_eq!(lines[2], "Amostra2  N/A               N/A");
        assert_eq!(lines[4], "Mean R²: 0.4994");
    }

    #[test]
    fn json_report_shape() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["records"][0]["sample_id"], "Amostra1");
        assert_eq!(value["records"][0]["outcome"]["status"], "fitted");
        assert_eq!(value["records"][0]["outcome"]["model"]["slope"], 2.0);
        assert_eq!(value["records"][1]["outcome"]["status"], "missing");
        assert_eq!(value["mean_r_squared"], 0.4994);
    }
}
