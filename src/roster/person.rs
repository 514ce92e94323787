use serde::Serialize;

/// Cohort token marking a ghost row.
pub const GHOST_COHORT: &str = "G";
/// Cohort token marking an instructor row.
pub const INSTRUCTOR_COHORT: &str = "I";

/// What kind of row a record is, derived from its cohort token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Ghost,
    Instructor,
}

impl Role {
    pub fn from_cohort(cohort: &str) -> Self {
        match cohort {
            GHOST_COHORT => Role::Ghost,
            INSTRUCTOR_COHORT => Role::Instructor,
            _ => Role::Student,
        }
    }
}

/// A single row of the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// `"{first_name} {last_name}"`.
    pub full_name: String,
    /// Blank for most ghost and instructor rows.
    pub house: String,
    pub advisor: String,
    pub cohort: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        house: impl Into<String>,
        advisor: impl Into<String>,
        cohort: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let full_name = format!("{} {}", first_name, last_name);
        Self {
            first_name,
            last_name,
            full_name,
            house: house.into(),
            advisor: advisor.into(),
            cohort: cohort.into(),
        }
    }

    pub fn role(&self) -> Role {
        Role::from_cohort(&self.cohort)
    }

    pub fn is_student(&self) -> bool {
        self.role() == Role::Student
    }
}
