use crate::{criteria::condition::FilterConditionType, value::Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// Operand
///
/// Provenance-tagged right-hand side of a leaf restriction. The original
/// design signalled "compare against another field" by smuggling a wrapper
/// object through the literal slot; here provenance is explicit so the
/// translator and matcher dispatch without downcasts.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Operand {
    /// An immediate literal value.
    Literal(Value),
    /// The name of another field on the same record.
    Field(String),
    /// The name of a bound query parameter.
    Param(String),
    /// The name of a session parameter.
    SessionParam(String),
}

impl Operand {
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// Borrow the literal value, if this operand carries one.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the referenced field name, if this operand is a field
    /// reference.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }
}

///
/// ZeroParamRestriction
///
/// Presence test: `IS_NULL` / `IS_NOT_NULL`.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct ZeroParamRestriction {
    ty: FilterConditionType,
    field: String,
}

impl ZeroParamRestriction {
    pub(crate) fn new(ty: FilterConditionType, field: impl Into<String>) -> Self {
        debug_assert!(ty.is_zero_param());
        Self {
            ty,
            field: field.into(),
        }
    }

    #[must_use]
    pub const fn condition_type(&self) -> FilterConditionType {
        self.ty
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field
    }
}

///
/// SingleParamRestriction
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SingleParamRestriction {
    ty: FilterConditionType,
    field: String,
    param: Operand,
}

impl SingleParamRestriction {
    pub(crate) fn new(ty: FilterConditionType, field: impl Into<String>, param: Operand) -> Self {
        debug_assert!(ty.is_single_param());
        Self {
            ty,
            field: field.into(),
            param,
        }
    }

    #[must_use]
    pub const fn condition_type(&self) -> FilterConditionType {
        self.ty
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn param(&self) -> &Operand {
        &self.param
    }

    /// Overwrite the literal parameter. Non-literal operands (field,
    /// parameter, session references) keep their provenance and are left
    /// untouched; returns whether the overwrite happened.
    pub fn set_value(&mut self, value: Value) -> bool {
        if self.param.is_literal() {
            self.param = Operand::Literal(value);
            return true;
        }

        false
    }
}

///
/// DoubleParamRestriction
///
/// Range test: `BETWEEN` / `NOT_BETWEEN` and their provenance variants.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct DoubleParamRestriction {
    ty: FilterConditionType,
    field: String,
    first: Operand,
    second: Operand,
}

impl DoubleParamRestriction {
    pub(crate) fn new(
        ty: FilterConditionType,
        field: impl Into<String>,
        first: Operand,
        second: Operand,
    ) -> Self {
        debug_assert!(ty.is_range());
        Self {
            ty,
            field: field.into(),
            first,
            second,
        }
    }

    #[must_use]
    pub const fn condition_type(&self) -> FilterConditionType {
        self.ty
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn first_param(&self) -> &Operand {
        &self.first
    }

    #[must_use]
    pub const fn second_param(&self) -> &Operand {
        &self.second
    }

    /// Overwrite both literal bounds; non-literal bounds are left
    /// untouched. Returns whether either bound changed.
    pub fn set_values(&mut self, first: Value, second: Value) -> bool {
        let mut replaced = false;
        if self.first.is_literal() {
            self.first = Operand::Literal(first);
            replaced = true;
        }
        if self.second.is_literal() {
            self.second = Operand::Literal(second);
            replaced = true;
        }

        replaced
    }
}

///
/// MultipleParamRestriction
///
/// Membership test: `AMONGST` / `NOT_AMONGST`.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct MultipleParamRestriction {
    ty: FilterConditionType,
    field: String,
    params: Vec<Value>,
}

impl MultipleParamRestriction {
    pub(crate) fn new(
        ty: FilterConditionType,
        field: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        debug_assert!(ty.is_amongst());
        Self {
            ty,
            field: field.into(),
            params,
        }
    }

    #[must_use]
    pub const fn condition_type(&self) -> FilterConditionType {
        self.ty
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn set_values(&mut self, params: Vec<Value>) {
        self.params = params;
    }
}

///
/// CompoundOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum CompoundOp {
    And,
    Or,
}

impl CompoundOp {
    #[must_use]
    pub const fn condition_type(self) -> FilterConditionType {
        match self {
            Self::And => FilterConditionType::And,
            Self::Or => FilterConditionType::Or,
        }
    }
}

///
/// CompoundRestriction
///
/// AND/OR node owning an ordered list of child restrictions. Mutable by
/// design: a built tree can be re-parameterized in place through the
/// `replace_all*` family and reused across bindings without rebuilding.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct CompoundRestriction {
    op: CompoundOp,
    restrictions: Vec<Restriction>,
}

impl CompoundRestriction {
    #[must_use]
    pub const fn new(op: CompoundOp) -> Self {
        Self {
            op,
            restrictions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn and() -> Self {
        Self::new(CompoundOp::And)
    }

    #[must_use]
    pub const fn or() -> Self {
        Self::new(CompoundOp::Or)
    }

    #[must_use]
    pub const fn op(&self) -> CompoundOp {
        self.op
    }

    #[must_use]
    pub const fn condition_type(&self) -> FilterConditionType {
        self.op.condition_type()
    }

    /// Append a child restriction.
    pub fn add(&mut self, restriction: impl Into<Restriction>) -> &mut Self {
        self.restrictions.push(restriction.into());
        self
    }

    #[must_use]
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.restrictions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    pub fn clear(&mut self) {
        self.restrictions.clear();
    }

    /// Structurally valid: non-empty, and every child valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.restrictions.is_empty() && self.restrictions.iter().all(Restriction::is_valid)
    }

    pub fn write_restricted_fields(&self, bucket: &mut BTreeSet<String>) {
        for restriction in &self.restrictions {
            restriction.write_restricted_fields(bucket);
        }
    }

    #[must_use]
    pub fn is_restricted_field(&self, field: &str) -> bool {
        self.restrictions
            .iter()
            .any(|r| r.is_restricted_field(field))
    }

    /// Overwrite the literal parameter of every single-param leaf matching
    /// `field`, at any depth. Returns whether any leaf was replaced.
    pub fn replace_all(&mut self, field: &str, value: &Value) -> bool {
        let mut replaced = false;
        for restriction in &mut self.restrictions {
            match restriction {
                Restriction::SingleParam(leaf) if leaf.field_name() == field => {
                    replaced |= leaf.set_value(value.clone());
                }
                Restriction::Compound(compound) => {
                    replaced |= compound.replace_all(field, value);
                }
                _ => {}
            }
        }

        replaced
    }

    /// Overwrite the literal bounds of every range leaf matching `field`,
    /// at any depth. Returns whether any leaf was replaced.
    pub fn replace_all_range(&mut self, field: &str, first: &Value, second: &Value) -> bool {
        let mut replaced = false;
        for restriction in &mut self.restrictions {
            match restriction {
                Restriction::DoubleParam(leaf) if leaf.field_name() == field => {
                    replaced |= leaf.set_values(first.clone(), second.clone());
                }
                Restriction::Compound(compound) => {
                    replaced |= compound.replace_all_range(field, first, second);
                }
                _ => {}
            }
        }

        replaced
    }

    /// Overwrite the value collection of every membership leaf matching
    /// `field`, at any depth. Returns whether any leaf was replaced.
    pub fn replace_all_amongst(&mut self, field: &str, values: &[Value]) -> bool {
        let mut replaced = false;
        for restriction in &mut self.restrictions {
            match restriction {
                Restriction::MultipleParam(leaf) if leaf.field_name() == field => {
                    leaf.set_values(values.to_vec());
                    replaced = true;
                }
                Restriction::Compound(compound) => {
                    replaced |= compound.replace_all_amongst(field, values);
                }
                _ => {}
            }
        }

        replaced
    }
}

///
/// Restriction
///
/// One node of a predicate expression tree: a leaf in one of four shapes,
/// or an AND/OR compound. The condition-type tag of a leaf always agrees
/// with its shape; constructors enforce this and mutators preserve it.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Restriction {
    ZeroParam(ZeroParamRestriction),
    SingleParam(SingleParamRestriction),
    DoubleParam(DoubleParamRestriction),
    MultipleParam(MultipleParamRestriction),
    Compound(CompoundRestriction),
}

impl Restriction {
    #[must_use]
    pub const fn condition_type(&self) -> FilterConditionType {
        match self {
            Self::ZeroParam(r) => r.condition_type(),
            Self::SingleParam(r) => r.condition_type(),
            Self::DoubleParam(r) => r.condition_type(),
            Self::MultipleParam(r) => r.condition_type(),
            Self::Compound(r) => r.condition_type(),
        }
    }

    /// The restricted field for leaves; `None` for compounds.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::ZeroParam(r) => Some(r.field_name()),
            Self::SingleParam(r) => Some(r.field_name()),
            Self::DoubleParam(r) => Some(r.field_name()),
            Self::MultipleParam(r) => Some(r.field_name()),
            Self::Compound(_) => None,
        }
    }

    #[must_use]
    pub const fn is_simple(&self) -> bool {
        !matches!(self, Self::Compound(_))
    }

    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::Compound(_))
    }

    /// Structural validity: every compound in the subtree non-empty, every
    /// membership leaf carrying at least one value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::ZeroParam(_) | Self::SingleParam(_) | Self::DoubleParam(_) => true,
            Self::MultipleParam(r) => !r.params().is_empty(),
            Self::Compound(r) => r.is_valid(),
        }
    }

    /// Recursively collect every field name referenced in the subtree,
    /// including fields referenced on the operand side of field-to-field
    /// comparisons.
    pub fn write_restricted_fields(&self, bucket: &mut BTreeSet<String>) {
        match self {
            Self::ZeroParam(r) => {
                bucket.insert(r.field_name().to_string());
            }
            Self::SingleParam(r) => {
                bucket.insert(r.field_name().to_string());
                if let Some(name) = r.param().field_name() {
                    bucket.insert(name.to_string());
                }
            }
            Self::DoubleParam(r) => {
                bucket.insert(r.field_name().to_string());
                for operand in [r.first_param(), r.second_param()] {
                    if let Some(name) = operand.field_name() {
                        bucket.insert(name.to_string());
                    }
                }
            }
            Self::MultipleParam(r) => {
                bucket.insert(r.field_name().to_string());
            }
            Self::Compound(r) => r.write_restricted_fields(bucket),
        }
    }

    #[must_use]
    pub fn is_restricted_field(&self, field: &str) -> bool {
        match self {
            Self::Compound(r) => r.is_restricted_field(field),
            Self::SingleParam(r) => {
                r.field_name() == field || r.param().field_name() == Some(field)
            }
            Self::DoubleParam(r) => {
                r.field_name() == field
                    || r.first_param().field_name() == Some(field)
                    || r.second_param().field_name() == Some(field)
            }
            _ => self.field_name() == Some(field),
        }
    }
}

impl From<CompoundRestriction> for Restriction {
    fn from(r: CompoundRestriction) -> Self {
        Self::Compound(r)
    }
}

impl From<ZeroParamRestriction> for Restriction {
    fn from(r: ZeroParamRestriction) -> Self {
        Self::ZeroParam(r)
    }
}

impl From<SingleParamRestriction> for Restriction {
    fn from(r: SingleParamRestriction) -> Self {
        Self::SingleParam(r)
    }
}

impl From<DoubleParamRestriction> for Restriction {
    fn from(r: DoubleParamRestriction) -> Self {
        Self::DoubleParam(r)
    }
}

impl From<MultipleParamRestriction> for Restriction {
    fn from(r: MultipleParamRestriction) -> Self {
        Self::MultipleParam(r)
    }
}

// --- leaf constructors ---
//
// One constructor per simple condition type, mirroring the construction
// dispatch. These are infallible: the shape is fixed by the method.

macro_rules! single_param_ctor {
    ($(#[$meta:meta])* $name:ident, $ty:ident, literal) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(field: impl Into<String>, value: impl Into<Value>) -> Self {
            Self::SingleParam(SingleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Literal(value.into()),
            ))
        }
    };
    ($(#[$meta:meta])* $name:ident, $ty:ident, field) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(field: impl Into<String>, other_field: impl Into<String>) -> Self {
            Self::SingleParam(SingleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Field(other_field.into()),
            ))
        }
    };
    ($(#[$meta:meta])* $name:ident, $ty:ident, param) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(field: impl Into<String>, param_name: impl Into<String>) -> Self {
            Self::SingleParam(SingleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Param(param_name.into()),
            ))
        }
    };
    ($(#[$meta:meta])* $name:ident, $ty:ident, session) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(field: impl Into<String>, param_name: impl Into<String>) -> Self {
            Self::SingleParam(SingleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::SessionParam(param_name.into()),
            ))
        }
    };
    ($(#[$meta:meta])* $name:ident, $ty:ident, size) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(field: impl Into<String>, size: i64) -> Self {
            Self::SingleParam(SingleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Literal(Value::Int(size)),
            ))
        }
    };
}

macro_rules! double_param_ctor {
    ($(#[$meta:meta])* $name:ident, $ty:ident, literal) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(
            field: impl Into<String>,
            lower: impl Into<Value>,
            upper: impl Into<Value>,
        ) -> Self {
            Self::DoubleParam(DoubleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Literal(lower.into()),
                Operand::Literal(upper.into()),
            ))
        }
    };
    ($(#[$meta:meta])* $name:ident, $ty:ident, field) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(
            field: impl Into<String>,
            lower_field: impl Into<String>,
            upper_field: impl Into<String>,
        ) -> Self {
            Self::DoubleParam(DoubleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Field(lower_field.into()),
                Operand::Field(upper_field.into()),
            ))
        }
    };
    ($(#[$meta:meta])* $name:ident, $ty:ident, param) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(
            field: impl Into<String>,
            lower_param: impl Into<String>,
            upper_param: impl Into<String>,
        ) -> Self {
            Self::DoubleParam(DoubleParamRestriction::new(
                FilterConditionType::$ty,
                field,
                Operand::Param(lower_param.into()),
                Operand::Param(upper_param.into()),
            ))
        }
    };
}

impl Restriction {
    #[must_use]
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::ZeroParam(ZeroParamRestriction::new(FilterConditionType::IsNull, field))
    }

    #[must_use]
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::ZeroParam(ZeroParamRestriction::new(
            FilterConditionType::IsNotNull,
            field,
        ))
    }

    single_param_ctor!(equals, Equals, literal);
    single_param_ctor!(
        /// Case-insensitive equals.
        iequals, IEquals, literal);
    single_param_ctor!(not_equals, NotEquals, literal);
    single_param_ctor!(inot_equals, INotEquals, literal);
    single_param_ctor!(less_than, LessThan, literal);
    single_param_ctor!(less_or_equal, LessOrEqual, literal);
    single_param_ctor!(greater_than, GreaterThan, literal);
    single_param_ctor!(greater_or_equal, GreaterOrEqual, literal);
    single_param_ctor!(like, Like, literal);
    single_param_ctor!(ilike, ILike, literal);
    single_param_ctor!(not_like, NotLike, literal);
    single_param_ctor!(begins_with, BeginsWith, literal);
    single_param_ctor!(ibegins_with, IBeginsWith, literal);
    single_param_ctor!(not_begin_with, NotBeginWith, literal);
    single_param_ctor!(ends_with, EndsWith, literal);
    single_param_ctor!(iends_with, IEndsWith, literal);
    single_param_ctor!(not_end_with, NotEndWith, literal);

    single_param_ctor!(equals_field, EqualsField, field);
    single_param_ctor!(not_equals_field, NotEqualsField, field);
    single_param_ctor!(less_than_field, LessThanField, field);
    single_param_ctor!(less_or_equal_field, LessOrEqualField, field);
    single_param_ctor!(greater_than_field, GreaterThanField, field);
    single_param_ctor!(greater_or_equal_field, GreaterOrEqualField, field);
    single_param_ctor!(like_field, LikeField, field);
    single_param_ctor!(ilike_field, ILikeField, field);
    single_param_ctor!(not_like_field, NotLikeField, field);
    single_param_ctor!(begins_with_field, BeginsWithField, field);
    single_param_ctor!(ibegins_with_field, IBeginsWithField, field);
    single_param_ctor!(not_begin_with_field, NotBeginWithField, field);
    single_param_ctor!(ends_with_field, EndsWithField, field);
    single_param_ctor!(iends_with_field, IEndsWithField, field);
    single_param_ctor!(not_end_with_field, NotEndWithField, field);

    single_param_ctor!(equals_param, EqualsParam, param);
    single_param_ctor!(not_equals_param, NotEqualsParam, param);
    single_param_ctor!(less_than_param, LessThanParam, param);
    single_param_ctor!(less_or_equal_param, LessOrEqualParam, param);
    single_param_ctor!(greater_than_param, GreaterThanParam, param);
    single_param_ctor!(greater_or_equal_param, GreaterOrEqualParam, param);
    single_param_ctor!(like_param, LikeParam, param);
    single_param_ctor!(ilike_param, ILikeParam, param);
    single_param_ctor!(not_like_param, NotLikeParam, param);
    single_param_ctor!(begins_with_param, BeginsWithParam, param);
    single_param_ctor!(ibegins_with_param, IBeginsWithParam, param);
    single_param_ctor!(not_begin_with_param, NotBeginWithParam, param);
    single_param_ctor!(ends_with_param, EndsWithParam, param);
    single_param_ctor!(iends_with_param, IEndsWithParam, param);
    single_param_ctor!(not_end_with_param, NotEndWithParam, param);

    single_param_ctor!(equals_session_param, EqualsSessionParam, session);
    single_param_ctor!(not_equals_session_param, NotEqualsSessionParam, session);

    single_param_ctor!(collection_size_equals, EqualsCollection, size);
    single_param_ctor!(collection_size_not_equals, NotEqualsCollection, size);
    single_param_ctor!(collection_size_less_than, LessThanCollection, size);
    single_param_ctor!(collection_size_less_or_equal, LessOrEqualCollection, size);
    single_param_ctor!(collection_size_greater_than, GreaterThanCollection, size);
    single_param_ctor!(
        collection_size_greater_or_equal,
        GreaterOrEqualCollection,
        size
    );

    double_param_ctor!(between, Between, literal);
    double_param_ctor!(not_between, NotBetween, literal);
    double_param_ctor!(between_field, BetweenField, field);
    double_param_ctor!(not_between_field, NotBetweenField, field);
    double_param_ctor!(between_param, BetweenParam, param);
    double_param_ctor!(not_between_param, NotBetweenParam, param);

    #[must_use]
    pub fn amongst(field: impl Into<String>, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::MultipleParam(MultipleParamRestriction::new(
            FilterConditionType::Amongst,
            field,
            values.into_iter().map(Into::into).collect(),
        ))
    }

    #[must_use]
    pub fn not_amongst(
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::MultipleParam(MultipleParamRestriction::new(
            FilterConditionType::NotAmongst,
            field,
            values.into_iter().map(Into::into).collect(),
        ))
    }
}
