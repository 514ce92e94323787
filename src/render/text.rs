use crate::render::QueryOutput;
use std::fmt::{self, Write};

/// Plain-text rendering, one entry per line.
///
/// Rosters print a `label (count)` header followed by indented names; data
/// rows are tab-separated.
pub fn render_text(output: &QueryOutput) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match output {
        QueryOutput::Names(names) => {
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        QueryOutput::NameSet(names) => {
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        QueryOutput::Rosters(rosters) => {
            for roster in rosters {
                writeln!(out, "{} ({})", roster.bucket, roster.names.len())?;
                for name in &roster.names {
                    writeln!(out, "  {}", name)?;
                }
            }
        }
        QueryOutput::Data(rows) => {
            for row in rows {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    row.full_name, row.house, row.advisor, row.cohort
                )?;
            }
        }
        QueryOutput::Cohort(Some(cohort)) => writeln!(out, "{}", cohort)?,
        QueryOutput::Cohort(None) => writeln!(out, "not found")?,
    }
    Ok(out)
}
