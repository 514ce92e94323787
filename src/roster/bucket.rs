//! The seven roster buckets used when grouping people by house.
//!
//! Five buckets are houses, matched by exact name. The last two collect the
//! reserved cohorts. Assignment checks the house first, then ghost, then
//! instructor.

use crate::roster::{Person, Role};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bucket {
    #[serde(rename = "Dumbledore's Army")]
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
    Ghosts,
    Instructors,
}

impl Bucket {
    /// All buckets in output order.
    pub const ALL: [Bucket; 7] = [
        Bucket::DumbledoresArmy,
        Bucket::Gryffindor,
        Bucket::Hufflepuff,
        Bucket::Ravenclaw,
        Bucket::Slytherin,
        Bucket::Ghosts,
        Bucket::Instructors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::DumbledoresArmy => "Dumbledore's Army",
            Bucket::Gryffindor => "Gryffindor",
            Bucket::Hufflepuff => "Hufflepuff",
            Bucket::Ravenclaw => "Ravenclaw",
            Bucket::Slytherin => "Slytherin",
            Bucket::Ghosts => "Ghosts",
            Bucket::Instructors => "Instructors",
        }
    }

    /// Exact house-name match; the two cohort buckets never match here.
    pub fn from_house(house: &str) -> Option<Self> {
        match house {
            "Dumbledore's Army" => Some(Bucket::DumbledoresArmy),
            "Gryffindor" => Some(Bucket::Gryffindor),
            "Hufflepuff" => Some(Bucket::Hufflepuff),
            "Ravenclaw" => Some(Bucket::Ravenclaw),
            "Slytherin" => Some(Bucket::Slytherin),
            _ => None,
        }
    }

    /// Bucket for a record, or None if it fits no bucket.
    pub fn for_person(person: &Person) -> Option<Self> {
        Self::from_house(&person.house).or(match person.role() {
            Role::Ghost => Some(Bucket::Ghosts),
            Role::Instructor => Some(Bucket::Instructors),
            Role::Student => None,
        })
    }

    /// Position in [`Bucket::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
