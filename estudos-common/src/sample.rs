//! # Sample Data
//!
//! The fixed, read-only data every lesson works on. Nothing here changes after
//! [`Samples::new`] returns; lessons only borrow it.

use im::HashMap as ImHashMap;

use crate::scope::{ScopeId, Scopes};

/// Personal names used by the sequence lessons, in their fixed order.
pub const SAMPLE_NAMES: [&str; 3] = ["Ana", "João", "Pedro"];

/// Small integers used by the arithmetic lessons.
pub const SAMPLE_NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

/// Name stored in the shared [`NamedHolder`].
pub const HOLDER_NAME: &str = "André";

/// A record with one optional name, created once in its own scope.
///
/// The lessons care about *where* the holder lives (its [`ScopeId`]) more than
/// about the name it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedHolder {
    scope: ScopeId,
    name: Option<String>,
}

impl NamedHolder {
    /// Creates a holder, opening a fresh scope for it.
    #[must_use]
    pub fn new(scopes: &mut Scopes, name: Option<String>) -> Self {
        Self {
            scope: scopes.enter("NamedHolder"),
            name,
        }
    }

    /// The scope this holder was created in.
    #[must_use]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// The name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A person record found through a [`PersonDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
}

/// An id-to-person lookup table that may come back empty-handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDirectory {
    people: ImHashMap<String, Person>,
}

impl PersonDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a directory that also knows `person`.
    #[must_use]
    pub fn with(&self, person: Person) -> Self {
        Self {
            people: self.people.update(person.id.clone(), person),
        }
    }

    /// Finds a person by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Everything the lessons share. Lessons only ever see it through `&Samples`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples {
    pub names: Vec<String>,
    pub numbers: Vec<i32>,
    pub nested: Vec<Vec<i32>>,
    pub holder: NamedHolder,
    pub directory: PersonDirectory,
}

impl Default for Samples {
    fn default() -> Self {
        Self::new()
    }
}

impl Samples {
    /// Builds the fixed sample data.
    ///
    /// # Example
    /// ```
    /// use estudos_common::Samples;
    ///
    /// let samples = Samples::new();
    /// assert_eq!(samples.names, ["Ana", "João", "Pedro"]);
    /// assert_eq!(samples.holder.name(), Some("André"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut scopes = Scopes::new();
        let holder = NamedHolder::new(&mut scopes, Some(HOLDER_NAME.to_string()));
        let directory = PersonDirectory::new()
            .with(Person {
                id: "123".to_string(),
                name: "Ana".to_string(),
            })
            .with(Person {
                id: "456".to_string(),
                name: "Pedro".to_string(),
            });

        Self {
            names: SAMPLE_NAMES.iter().map(|n| (*n).to_string()).collect(),
            numbers: SAMPLE_NUMBERS.to_vec(),
            nested: vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]],
            holder,
            directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_contents() {
        let samples = Samples::new();
        assert_eq!(samples.names, SAMPLE_NAMES);
        assert_eq!(samples.numbers, [1, 2, 3, 4, 5]);
        assert_eq!(samples.nested.len(), 3);
        assert_eq!(samples.directory.len(), 2);
    }

    #[test]
    fn test_holder_owns_first_scope() {
        let samples = Samples::new();
        assert_eq!(samples.holder.scope().index(), 0);
        assert_eq!(samples.holder.scope().label(), "NamedHolder");
    }

    #[test]
    fn test_holder_without_name() {
        let mut scopes = Scopes::new();
        let holder = NamedHolder::new(&mut scopes, None);
        assert_eq!(holder.name(), None);
    }

    #[test]
    fn test_directory_lookup() {
        let samples = Samples::new();
        assert_eq!(samples.directory.find("123").map(|p| p.name.as_str()), Some("Ana"));
        assert!(samples.directory.find("999").is_none());
        assert!(PersonDirectory::new().is_empty());
    }
}
