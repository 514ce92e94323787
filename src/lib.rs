//! Load a pipe-delimited roster file and answer set/list queries over it.
//!
//! ```text
//!  roster file (first|last|house|advisor|cohort)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  roster   │  parse lines → Vec<Person>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query    │  houses, cohorts, rosters, dupes, housemates
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  render   │  text / JSON
//!   └──────────┘
//! ```

pub mod error;
pub mod query;
pub mod render;
pub mod roster;

pub use error::{Result, RosterError};
pub use query::{
    CohortFilter, DataRow, HouseRoster, all_data, all_houses, all_names_by_house,
    find_duped_last_names, get_cohort_for, get_housemates_for, students_by_cohort,
};
pub use roster::{Bucket, Person, Role, load};
