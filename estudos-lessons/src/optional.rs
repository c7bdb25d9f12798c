//! Optional values and lookups.
//!
//! A name that might be missing is an `Option<&str>`, not a nullable
//! reference. The compiler will not let the code touch the name until it has
//! matched `Some`, which is the check a null-based language leaves to memory.

use std::io::Write;

use estudos_common::{KeyValueStore, PersonDirectory, Samples};
use tracing::debug;

use crate::error::Result;

/// Uppercases a possibly-missing name.
///
/// # Examples
/// ```
/// use estudos_lessons::optional::shout;
/// assert_eq!(shout(Some("André")).as_deref(), Some("ANDRÉ"));
/// assert_eq!(shout(None), None);
/// ```
pub fn shout(name: Option<&str>) -> Option<String> {
    name.map(str::to_uppercase)
}

/// Looks a person up by id and keeps only the name.
///
/// # Examples
/// ```
/// use estudos_common::Samples;
/// use estudos_lessons::optional::find_name;
///
/// let samples = Samples::new();
/// assert_eq!(find_name(&samples.directory, "123").as_deref(), Some("Ana"));
/// assert_eq!(find_name(&samples.directory, "000"), None);
/// ```
pub fn find_name(directory: &PersonDirectory, id: &str) -> Option<String> {
    directory.find(id).map(|person| person.name.clone())
}

/// Prints the holder's name and two directory lookups, each after a presence check.
pub fn optional_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    // Explicit presence check before use.
    if let Some(name) = samples.holder.name() {
        writeln!(out, "{}", name.to_uppercase())?;
    }

    for id in ["123", "999"] {
        match find_name(&samples.directory, id) {
            Some(name) => writeln!(out, "{id}: {}", name.to_uppercase())?,
            None => writeln!(out, "{id}: no person found")?,
        }
    }
    Ok(())
}

/// Writes two bindings into a fresh store and reads one back.
pub fn store_lesson(_samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let store = KeyValueStore::new()
        .insert("joao", "valor1")
        .insert("ana", "valor2");
    debug!(entries = store.len(), "store populated");

    match store.get("joao") {
        Some(value) => writeln!(out, "{value}")?,
        None => writeln!(out, "joao: not found")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estudos_common::{NamedHolder, Person, Scopes};

    #[test]
    fn test_shout() {
        assert_eq!(shout(Some("ana")).as_deref(), Some("ANA"));
        assert_eq!(shout(None), None);
    }

    #[test]
    fn test_find_name_in_custom_directory() {
        let directory = PersonDirectory::new().with(Person {
            id: "7".to_string(),
            name: "Maria".to_string(),
        });
        assert_eq!(find_name(&directory, "7").as_deref(), Some("Maria"));
        assert_eq!(find_name(&PersonDirectory::new(), "7"), None);
    }

    #[test]
    fn test_optional_lesson_output() {
        let mut out = Vec::new();
        optional_lesson(&Samples::new(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ANDRÉ\n123: ANA\n999: no person found\n"
        );
    }

    #[test]
    fn test_optional_lesson_with_nameless_holder() {
        let mut samples = Samples::new();
        samples.holder = NamedHolder::new(&mut Scopes::new(), None);

        let mut out = Vec::new();
        optional_lesson(&samples, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("123: ANA"));
    }

    #[test]
    fn test_store_lesson_output() {
        let mut out = Vec::new();
        store_lesson(&Samples::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "valor1\n");
    }
}
