//! Derived views over already-loaded records.

use crate::error::{Result, RosterError};
use crate::roster::{Bucket, Person};
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which students a cohort listing includes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CohortFilter {
    #[default]
    All,
    Only(String),
}

impl CohortFilter {
    pub fn matches(&self, cohort: &str) -> bool {
        match self {
            CohortFilter::All => true,
            CohortFilter::Only(label) => label == cohort,
        }
    }
}

impl FromStr for CohortFilter {
    type Err = Infallible;

    /// `"All"` selects every cohort; anything else is an exact label.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "All" => CohortFilter::All,
            other => CohortFilter::Only(other.to_string()),
        })
    }
}

impl fmt::Display for CohortFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohortFilter::All => f.write_str("All"),
            CohortFilter::Only(label) => f.write_str(label),
        }
    }
}

/// One record as listed by [`data_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRow {
    pub full_name: String,
    pub house: String,
    pub advisor: String,
    pub cohort: String,
}

impl From<&Person> for DataRow {
    fn from(p: &Person) -> Self {
        Self {
            full_name: p.full_name.clone(),
            house: p.house.clone(),
            advisor: p.advisor.clone(),
            cohort: p.cohort.clone(),
        }
    }
}

/// Sorted names in one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseRoster {
    pub bucket: Bucket,
    pub names: Vec<String>,
}

/// Houses of student rows.
pub fn houses(people: &[Person]) -> BTreeSet<String> {
    people
        .iter()
        .filter(|p| p.is_student())
        .map(|p| p.house.clone())
        .collect()
}

/// Sorted full names of students passing `filter`.
pub fn students(people: &[Person], filter: &CohortFilter) -> Vec<String> {
    let mut names: Vec<String> = people
        .iter()
        .filter(|p| p.is_student() && filter.matches(&p.cohort))
        .map(|p| p.full_name.clone())
        .collect();
    names.sort();
    names
}

/// One roster per [`Bucket`], in [`Bucket::ALL`] order. Rows that fit no
/// bucket are dropped.
pub fn rosters(people: &[Person]) -> Vec<HouseRoster> {
    let mut out: Vec<HouseRoster> = Bucket::ALL
        .iter()
        .map(|&bucket| HouseRoster {
            bucket,
            names: Vec::new(),
        })
        .collect();

    let mut dropped = 0usize;
    for p in people {
        match Bucket::for_person(p) {
            Some(bucket) => out[bucket.index()].names.push(p.full_name.clone()),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!("{} records fit no roster bucket", dropped);
    }

    for roster in &mut out {
        roster.names.sort();
    }
    out
}

/// Every record in load order.
pub fn data_rows(people: &[Person]) -> Vec<DataRow> {
    people.iter().map(DataRow::from).collect()
}

/// Cohort of the first record named `full_name`.
pub fn cohort_of<'a>(people: &'a [Person], full_name: &str) -> Option<&'a str> {
    people
        .iter()
        .find(|p| p.full_name == full_name)
        .map(|p| p.cohort.as_str())
}

/// Last names that appear on more than one record.
pub fn duplicated_last_names(people: &[Person]) -> BTreeSet<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for p in people {
        *counts.entry(p.last_name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Names sharing both house and cohort with the first record named
/// `full_name`, excluding that name.
pub fn housemates(people: &[Person], full_name: &str) -> Result<BTreeSet<String>> {
    let target = people
        .iter()
        .find(|p| p.full_name == full_name)
        .ok_or_else(|| RosterError::PersonNotFound(full_name.to_string()))?;

    Ok(people
        .iter()
        .filter(|p| p.house == target.house && p.cohort == target.cohort)
        .filter(|p| p.full_name != full_name)
        .map(|p| p.full_name.clone())
        .collect())
}
