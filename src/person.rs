//! People records and the directory they are picked from

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{PickerError, Result};
use crate::search::matches_query;

/// Dataset compiled into the binary, used when no `--people` file is given
const BUILTIN_PEOPLE: &str = include_str!("../data/people.json");

/// Sex as stored in the dataset (`"m"` / `"f"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'm',
            Sex::Female => 'f',
        }
    }
}

/// A single person. Fields beyond these three are ignored when loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub sex: Sex,
    /// Unique, stable identity key
    pub slug: String,
}

impl Person {
    pub fn new(name: impl Into<String>, sex: Sex, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex,
            slug: slug.into(),
        }
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}

/// Validated list of everyone that can be picked
#[derive(Debug, Clone, Default)]
pub struct PeopleDirectory {
    people: Vec<Person>,
}

impl PeopleDirectory {
    /// Build a directory, rejecting blank names/slugs and duplicate slugs
    pub fn new(people: Vec<Person>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(people.len());
        for person in &people {
            if person.slug.trim().is_empty() {
                return Err(PickerError::InvalidPerson(format!(
                    "'{}' has an empty slug",
                    person.name
                )));
            }
            if person.name.trim().is_empty() {
                return Err(PickerError::InvalidPerson(format!(
                    "slug '{}' has an empty name",
                    person.slug
                )));
            }
            if !seen.insert(person.slug.as_str()) {
                return Err(PickerError::DuplicateSlug(person.slug.clone()));
            }
        }

        Ok(Self { people })
    }

    /// Parse a JSON array of people
    pub fn from_json_str(json: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let people: Vec<Person> =
            serde_json::from_str(json).map_err(|e| PickerError::json(origin.as_ref(), e))?;
        Self::new(people)
    }

    /// Load a JSON array of people from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, path)
    }

    /// The dataset shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PEOPLE, "<builtin>")
    }

    /// Load from `path` when given, otherwise fall back to the built-in dataset
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Self::builtin(),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Everyone whose name contains `query`, in directory order
    pub fn filter(&self, query: &str) -> Vec<Person> {
        self.people
            .iter()
            .filter(|p| matches_query(&p.name, query))
            .cloned()
            .collect()
    }
}
