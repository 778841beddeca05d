use crate::{
    criteria::{
        condition::{ConditionError, ConditionParams, FilterConditionType},
        restriction::{CompoundOp, CompoundRestriction, Restriction},
    },
    value::Value,
};
use thiserror::Error as ThisError;

///
/// CriteriaBuilder
///
/// Stack-protocol builder for restriction trees.
///
/// `begin_and`/`begin_or` open a nesting level and must be balanced by
/// `end_compound`; `add_*` appends a leaf to the innermost open level.
/// Closing the outermost level establishes the root; `build` consumes the
/// builder and hands the root out. The builder is single-use by
/// construction: every protocol violation is a typed error, and a
/// consumed builder cannot start a second tree.
///
/// Invariants:
/// - exactly one root per builder
/// - a leaf only ever attaches to the innermost open compound
/// - no empty compound reaches the tree
///

#[derive(Debug, Default)]
pub struct CriteriaBuilder {
    stack: Vec<CompoundRestriction>,
    root: Option<CompoundRestriction>,
}

///
/// BuilderError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BuilderError {
    #[error("root condition is already established")]
    RootAlreadyEstablished,
    #[error("compound condition is not started")]
    CompoundNotStarted,
    #[error("compound condition must have at least one subcondition")]
    EmptyCompound,
    #[error("root condition is not established")]
    RootNotEstablished,
    #[error(transparent)]
    Condition(#[from] ConditionError),
}

macro_rules! add_method {
    ($(#[$meta:meta])* $name:ident => $ctor:ident(field, value)) => {
        $(#[$meta])*
        pub fn $name(
            self,
            field: impl Into<String>,
            value: impl Into<Value>,
        ) -> Result<Self, BuilderError> {
            self.add_simple(Restriction::$ctor(field, value))
        }
    };
    ($(#[$meta:meta])* $name:ident => $ctor:ident(field, name)) => {
        $(#[$meta])*
        pub fn $name(
            self,
            field: impl Into<String>,
            name: impl Into<String>,
        ) -> Result<Self, BuilderError> {
            self.add_simple(Restriction::$ctor(field, name))
        }
    };
    ($(#[$meta:meta])* $name:ident => $ctor:ident(field, size)) => {
        $(#[$meta])*
        pub fn $name(self, field: impl Into<String>, size: i64) -> Result<Self, BuilderError> {
            self.add_simple(Restriction::$ctor(field, size))
        }
    };
    ($(#[$meta:meta])* $name:ident => $ctor:ident(field, value, value)) => {
        $(#[$meta])*
        pub fn $name(
            self,
            field: impl Into<String>,
            lower: impl Into<Value>,
            upper: impl Into<Value>,
        ) -> Result<Self, BuilderError> {
            self.add_simple(Restriction::$ctor(field, lower, upper))
        }
    };
    ($(#[$meta:meta])* $name:ident => $ctor:ident(field, name, name)) => {
        $(#[$meta])*
        pub fn $name(
            self,
            field: impl Into<String>,
            lower: impl Into<String>,
            upper: impl Into<String>,
        ) -> Result<Self, BuilderError> {
            self.add_simple(Restriction::$ctor(field, lower, upper))
        }
    };
    ($(#[$meta:meta])* $name:ident => $ctor:ident(field, values)) => {
        $(#[$meta])*
        pub fn $name(
            self,
            field: impl Into<String>,
            values: impl IntoIterator<Item = impl Into<Value>>,
        ) -> Result<Self, BuilderError> {
            self.add_simple(Restriction::$ctor(field, values))
        }
    };
}

impl CriteriaBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    /// Open an AND nesting level.
    pub fn begin_and(self) -> Result<Self, BuilderError> {
        self.begin_compound(CompoundOp::And)
    }

    /// Open an OR nesting level.
    pub fn begin_or(self) -> Result<Self, BuilderError> {
        self.begin_compound(CompoundOp::Or)
    }

    /// Close the innermost open nesting level, attaching it to its parent
    /// or establishing it as the root when it was the outermost.
    pub fn end_compound(mut self) -> Result<Self, BuilderError> {
        let compound = self.stack.pop().ok_or(BuilderError::CompoundNotStarted)?;
        if compound.is_empty() {
            return Err(BuilderError::EmptyCompound);
        }

        match self.stack.last_mut() {
            Some(parent) => {
                parent.add(compound);
            }
            None => self.root = Some(compound),
        }

        Ok(self)
    }

    /// Append a condition through the enumeration dispatch, validating
    /// parameter arity and provenance.
    pub fn add_condition(
        self,
        ty: FilterConditionType,
        field: impl Into<String>,
        params: ConditionParams,
    ) -> Result<Self, BuilderError> {
        let restriction = ty.build_restriction(field, params)?;
        self.add_simple(restriction)
    }

    /// Append an already-constructed simple restriction to the innermost
    /// open compound.
    pub fn add_restriction(self, restriction: Restriction) -> Result<Self, BuilderError> {
        self.add_simple(restriction)
    }

    pub fn add_is_null(self, field: impl Into<String>) -> Result<Self, BuilderError> {
        self.add_simple(Restriction::is_null(field))
    }

    pub fn add_is_not_null(self, field: impl Into<String>) -> Result<Self, BuilderError> {
        self.add_simple(Restriction::is_not_null(field))
    }

    add_method!(add_equals => equals(field, value));
    add_method!(
        /// Case-insensitive equals.
        add_iequals => iequals(field, value));
    add_method!(add_not_equals => not_equals(field, value));
    add_method!(add_inot_equals => inot_equals(field, value));
    add_method!(add_less_than => less_than(field, value));
    add_method!(add_less_than_equal => less_or_equal(field, value));
    add_method!(add_greater_than => greater_than(field, value));
    add_method!(add_greater_than_equal => greater_or_equal(field, value));
    add_method!(add_like => like(field, value));
    add_method!(add_ilike => ilike(field, value));
    add_method!(add_not_like => not_like(field, value));
    add_method!(add_begins_with => begins_with(field, value));
    add_method!(add_ibegins_with => ibegins_with(field, value));
    add_method!(add_not_begin_with => not_begin_with(field, value));
    add_method!(add_ends_with => ends_with(field, value));
    add_method!(add_iends_with => iends_with(field, value));
    add_method!(add_not_end_with => not_end_with(field, value));

    add_method!(add_equals_field => equals_field(field, name));
    add_method!(add_not_equals_field => not_equals_field(field, name));
    add_method!(add_less_than_field => less_than_field(field, name));
    add_method!(add_less_than_equal_field => less_or_equal_field(field, name));
    add_method!(add_greater_than_field => greater_than_field(field, name));
    add_method!(add_greater_than_equal_field => greater_or_equal_field(field, name));
    add_method!(add_like_field => like_field(field, name));
    add_method!(add_ilike_field => ilike_field(field, name));
    add_method!(add_not_like_field => not_like_field(field, name));
    add_method!(add_begins_with_field => begins_with_field(field, name));
    add_method!(add_ibegins_with_field => ibegins_with_field(field, name));
    add_method!(add_not_begin_with_field => not_begin_with_field(field, name));
    add_method!(add_ends_with_field => ends_with_field(field, name));
    add_method!(add_iends_with_field => iends_with_field(field, name));
    add_method!(add_not_end_with_field => not_end_with_field(field, name));

    add_method!(add_equals_param => equals_param(field, name));
    add_method!(add_not_equals_param => not_equals_param(field, name));
    add_method!(add_less_than_param => less_than_param(field, name));
    add_method!(add_less_than_equal_param => less_or_equal_param(field, name));
    add_method!(add_greater_than_param => greater_than_param(field, name));
    add_method!(add_greater_than_equal_param => greater_or_equal_param(field, name));
    add_method!(add_like_param => like_param(field, name));
    add_method!(add_ilike_param => ilike_param(field, name));
    add_method!(add_not_like_param => not_like_param(field, name));
    add_method!(add_begins_with_param => begins_with_param(field, name));
    add_method!(add_ibegins_with_param => ibegins_with_param(field, name));
    add_method!(add_not_begin_with_param => not_begin_with_param(field, name));
    add_method!(add_ends_with_param => ends_with_param(field, name));
    add_method!(add_iends_with_param => iends_with_param(field, name));
    add_method!(add_not_end_with_param => not_end_with_param(field, name));

    add_method!(add_equals_session_param => equals_session_param(field, name));
    add_method!(add_not_equals_session_param => not_equals_session_param(field, name));

    add_method!(add_collection_size_equals => collection_size_equals(field, size));
    add_method!(add_collection_size_not_equals => collection_size_not_equals(field, size));
    add_method!(add_collection_size_less_than => collection_size_less_than(field, size));
    add_method!(add_collection_size_less_than_equal => collection_size_less_or_equal(field, size));
    add_method!(add_collection_size_greater_than => collection_size_greater_than(field, size));
    add_method!(
        add_collection_size_greater_than_equal => collection_size_greater_or_equal(field, size));

    add_method!(add_between => between(field, value, value));
    add_method!(add_not_between => not_between(field, value, value));
    add_method!(add_between_field => between_field(field, name, name));
    add_method!(add_not_between_field => not_between_field(field, name, name));
    add_method!(add_between_param => between_param(field, name, name));
    add_method!(add_not_between_param => not_between_param(field, name, name));

    add_method!(add_amongst => amongst(field, values));
    add_method!(add_not_amongst => not_amongst(field, values));

    /// Hand out the established root, consuming the builder.
    pub fn build(self) -> Result<CompoundRestriction, BuilderError> {
        self.root.ok_or(BuilderError::RootNotEstablished)
    }

    fn begin_compound(mut self, op: CompoundOp) -> Result<Self, BuilderError> {
        if self.root.is_some() {
            return Err(BuilderError::RootAlreadyEstablished);
        }

        self.stack.push(CompoundRestriction::new(op));
        Ok(self)
    }

    fn add_simple(mut self, restriction: Restriction) -> Result<Self, BuilderError> {
        if self.root.is_some() {
            return Err(BuilderError::RootAlreadyEstablished);
        }

        let top = self.stack.last_mut().ok_or(BuilderError::CompoundNotStarted)?;
        top.add(restriction);
        Ok(self)
    }
}
