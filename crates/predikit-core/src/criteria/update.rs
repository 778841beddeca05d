use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// Update
///
/// Ordered field→value assignment list for an update-set clause. Insertion
/// order is preserved; re-assigning a field overwrites its value in place.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Update {
    assignments: Vec<(String, Value)>,
}

impl Update {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Assign a value to a field. The last assignment to a field wins; the
    /// field keeps its original position.
    #[must_use]
    pub fn add(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.assignments.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => *slot = value,
            None => self.assignments.push((field, value)),
        }

        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.assignments
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|(f, _)| f.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.assignments.iter()
    }
}

impl<'a> IntoIterator for &'a Update {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
