//! Output rendering for query results.

pub mod text;

use crate::query::{DataRow, HouseRoster};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeSet;

/// Any query result, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    /// Ordered names (cohort listings).
    Names(Vec<String>),
    /// Houses, duplicated last names, housemates.
    NameSet(BTreeSet<String>),
    Rosters(Vec<HouseRoster>),
    Data(Vec<DataRow>),
    /// None when the person is not in the roster.
    Cohort(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Render a query result in the requested format. Both formats end with a
/// newline.
pub fn render(output: &QueryOutput, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(text::render_text(output)?),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(output)?;
            json.push('\n');
            Ok(json)
        }
    }
}
