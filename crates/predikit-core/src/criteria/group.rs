use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// GroupBy
///
/// Ordered, distinct group-by field list. Derefs to the underlying slice
/// for read access.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Deserialize, Serialize)]
pub struct GroupBy {
    fields: Vec<String>,
}

impl GroupBy {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field; re-adding an already grouped field is a no-op.
    #[must_use]
    pub fn add(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }

        self
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for GroupBy {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::add)
    }
}
