use serde::{Deserialize, Serialize};

///
/// OrderType
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum OrderType {
    #[default]
    Ascending,
    Descending,
}

impl OrderType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DSC",
        }
    }
}

///
/// OrderPolicy
///
/// Where a re-added sort field lands: `AddTrailing` appends at the back
/// (least significant), `AddLeading` inserts at the front (most
/// significant). Either way the previous part for the same field is
/// removed first, so a field appears at most once.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub enum OrderPolicy {
    #[default]
    AddTrailing,
    AddLeading,
}

///
/// Part
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Part {
    field: String,
    ty: OrderType,
}

impl Part {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.ty
    }

    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self.ty, OrderType::Ascending)
    }
}

///
/// Order
///
/// Ordered sort-field specification consumed alongside a restriction tree
/// when forming a full query.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Order {
    policy: OrderPolicy,
    parts: Vec<Part>,
}

impl Order {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_policy(OrderPolicy::AddTrailing)
    }

    #[must_use]
    pub const fn leading() -> Self {
        Self::with_policy(OrderPolicy::AddLeading)
    }

    #[must_use]
    pub const fn with_policy(policy: OrderPolicy) -> Self {
        Self {
            policy,
            parts: Vec::new(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> OrderPolicy {
        self.policy
    }

    /// Add an ascending sort field.
    #[must_use]
    pub fn add(self, field: impl Into<String>) -> Self {
        self.add_with(field, OrderType::Ascending)
    }

    /// Add a sort field with an explicit direction.
    #[must_use]
    pub fn add_with(mut self, field: impl Into<String>, ty: OrderType) -> Self {
        let field = field.into();
        self.parts.retain(|part| part.field != field);

        let part = Part { field, ty };
        match self.policy {
            OrderPolicy::AddTrailing => self.parts.push(part),
            OrderPolicy::AddLeading => self.parts.insert(0, part),
        }

        self
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

///
/// TESTS
///
