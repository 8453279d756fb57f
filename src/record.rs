//! The distribution record and the fixed reference list it is seeded from.

use serde::{Deserialize, Serialize};

/// A seed entry as written in source. Ids are assigned from list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub title: &'static str,
    pub author: &'static str,
    pub year: i32,
}

impl Distribution {
    const fn new(title: &'static str, author: &'static str, year: i32) -> Self {
        Self {
            title,
            author,
            year,
        }
    }
}

/// Reference dataset. Order defines ids 1..=13.
pub const DISTRIBUTIONS: &[Distribution] = &[
    Distribution::new("Ubuntu", "Mark Shuttleworth", 2004),
    Distribution::new("Debian", "Ian Murdock", 1993),
    Distribution::new("Linux Mint", "Clement Lefebvre", 2006),
    Distribution::new("Fedora", "Warren Togami", 2003),
    Distribution::new("Arch Linux", "Judd Vinet", 2002),
    Distribution::new("Red Hat Linux", "Marc Ewing", 1993),
    Distribution::new("Red Hat Enterprise Linux", "Marc Ewing", 2002),
    Distribution::new("SUSE Linux", "Roland Dyroff", 1994),
    Distribution::new("Manjaro", "Philip Müller", 2011),
    Distribution::new("elementary OS", "Daniel Foré", 2011),
    Distribution::new("Kali Linux", "Mati Aharoni", 2013),
    Distribution::new("Gentoo", "Daniel Robbins", 2000),
    Distribution::new("Slackware", "Patrick Volkerding", 1993),
];

/// One row of the `distributions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Primary key; 1-based position in the seed list.
    pub id: i64,
    /// Distribution name.
    pub title: String,
    /// Creator name.
    pub author: String,
    /// Creation year.
    pub year: i32,
}

impl Record {
    /// Build the record stored for the seed entry at 1-based `position`.
    #[must_use]
    pub fn from_seed(position: i64, seed: &Distribution) -> Self {
        Self {
            id: position,
            title: seed.title.to_string(),
            author: seed.author.to_string(),
            year: seed.year,
        }
    }
}

/// Every seed entry as a record, ids assigned by position.
#[must_use]
pub fn seed_records(entries: &[Distribution]) -> Vec<Record> {
    entries
        .iter()
        .zip(1_i64..)
        .map(|(entry, id)| Record::from_seed(id, entry))
        .collect()
}
