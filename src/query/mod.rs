//! Roster queries. Each function reads the roster at `source` afresh and
//! derives one view from it; the pure derivations live in [`views`].

pub mod views;

pub use views::{CohortFilter, DataRow, HouseRoster};

use crate::Result;
use crate::roster::load;
use std::collections::BTreeSet;
use std::path::Path;

/// Set of houses that have at least one student.
pub fn all_houses(source: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(views::houses(&load(source)?))
}

/// Student full names in `cohort`, sorted.
pub fn students_by_cohort(source: impl AsRef<Path>, cohort: &CohortFilter) -> Result<Vec<String>> {
    Ok(views::students(&load(source)?, cohort))
}

/// The seven rosters: five houses, then ghosts, then instructors.
pub fn all_names_by_house(source: impl AsRef<Path>) -> Result<Vec<HouseRoster>> {
    Ok(views::rosters(&load(source)?))
}

pub fn all_data(source: impl AsRef<Path>) -> Result<Vec<DataRow>> {
    Ok(views::data_rows(&load(source)?))
}

/// Cohort of the first person named `full_name`, if any.
pub fn get_cohort_for(source: impl AsRef<Path>, full_name: &str) -> Result<Option<String>> {
    Ok(views::cohort_of(&load(source)?, full_name).map(str::to_string))
}

pub fn find_duped_last_names(source: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(views::duplicated_last_names(&load(source)?))
}

/// Fails with `PersonNotFound` when nobody is named `full_name`.
pub fn get_housemates_for(source: impl AsRef<Path>, full_name: &str) -> Result<BTreeSet<String>> {
    views::housemates(&load(source)?, full_name)
}
