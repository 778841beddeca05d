use crate::{
    criteria::{
        condition::{FilterConditionType, RestrictionType},
        restriction::{
            CompoundRestriction, DoubleParamRestriction, MultipleParamRestriction, Operand,
            Restriction, SingleParamRestriction, ZeroParamRestriction,
        },
    },
    value::{Value, semantic_cmp},
};
use std::{cmp::Ordering, collections::BTreeMap};
use thiserror::Error as ThisError;

///
/// Row
///
/// Read-only field access for in-memory predicate evaluation. `None` means
/// the row has no such field; an explicit `Value::None` means the field
/// exists with a null value. Both satisfy `IS_NULL` and neither satisfies
/// a value comparison.
///

pub trait Row {
    fn value(&self, field: &str) -> Option<Value>;
}

impl Row for BTreeMap<String, Value> {
    fn value(&self, field: &str) -> Option<Value> {
        self.get(field).cloned()
    }
}

///
/// MatchContext
///
/// Name-resolution environment for parameter-bound and session-parameter
/// operands. Evaluation against a tree that references an unbound name is
/// a typed error, not a silent false.
///

#[derive(Clone, Debug, Default)]
pub struct MatchContext {
    params: BTreeMap<String, Value>,
    session: BTreeMap<String, Value>,
}

impl MatchContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: BTreeMap::new(),
            session: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_session_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.session.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    #[must_use]
    pub fn session_param(&self, name: &str) -> Option<&Value> {
        self.session.get(name)
    }
}

///
/// MatchError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MatchError {
    #[error("row has no field '{0}' referenced by a comparison operand")]
    MissingField(String),
    #[error("no bound parameter named '{0}'")]
    UnknownParam(String),
    #[error("no session parameter named '{0}'")]
    UnknownSessionParam(String),
    #[error("values for field '{field}' are not comparable")]
    Incomparable { field: String },
    #[error("condition {0} requires text on both sides")]
    TextExpected(FilterConditionType),
    #[error("field '{0}' is not a collection")]
    NotACollection(String),
    #[error("compound restriction has no subconditions")]
    EmptyCompound,
    #[error("condition {0} cannot be evaluated in this shape")]
    UnsupportedCondition(FilterConditionType),
}

/// Evaluate a restriction tree against one row.
///
/// `And` short-circuits on the first false child, `Or` on the first true
/// one. Value comparisons never match an absent or null field; presence
/// tests are the only conditions that observe them.
pub fn matches(
    restriction: &Restriction,
    row: &impl Row,
    cx: &MatchContext,
) -> Result<bool, MatchError> {
    match restriction {
        Restriction::Compound(compound) => match_compound(compound, row, cx),
        Restriction::ZeroParam(leaf) => Ok(match_presence(leaf, row)),
        Restriction::SingleParam(leaf) => match_single(leaf, row, cx),
        Restriction::DoubleParam(leaf) => match_double(leaf, row, cx),
        Restriction::MultipleParam(leaf) => Ok(match_membership(leaf, row)),
    }
}

fn match_compound(
    compound: &CompoundRestriction,
    row: &impl Row,
    cx: &MatchContext,
) -> Result<bool, MatchError> {
    if compound.is_empty() {
        return Err(MatchError::EmptyCompound);
    }

    let mut all = true;
    for child in compound.restrictions() {
        let hit = matches(child, row, cx)?;
        match compound.condition_type() {
            FilterConditionType::Or if hit => return Ok(true),
            FilterConditionType::Or => all = false,
            _ if !hit => return Ok(false),
            _ => {}
        }
    }

    Ok(match compound.condition_type() {
        FilterConditionType::Or => false,
        _ => all,
    })
}

fn match_presence(leaf: &ZeroParamRestriction, row: &impl Row) -> bool {
    let absent = matches!(row.value(leaf.field_name()), Option::None | Some(Value::None));
    match leaf.condition_type() {
        FilterConditionType::IsNull => absent,
        _ => !absent,
    }
}

fn match_single(
    leaf: &SingleParamRestriction,
    row: &impl Row,
    cx: &MatchContext,
) -> Result<bool, MatchError> {
    let ty = leaf.condition_type();
    if ty.is_collection_size() {
        return match_collection_size(leaf, row, cx);
    }

    let Some(actual) = row.value(leaf.field_name()) else {
        return Ok(false);
    };
    if actual.is_none() {
        return Ok(false);
    }

    let expected = resolve_operand(leaf.param(), row, cx)?;
    let ci = ty.is_case_insensitive();

    match ty.restriction_type() {
        RestrictionType::Equals => Ok(value_eq(&actual, &expected, ci)),
        RestrictionType::NotEquals => Ok(!value_eq(&actual, &expected, ci)),
        RestrictionType::LessThan => {
            Ok(ordering(leaf.field_name(), &actual, &expected)? == Ordering::Less)
        }
        RestrictionType::LessOrEqual => {
            Ok(ordering(leaf.field_name(), &actual, &expected)? != Ordering::Greater)
        }
        RestrictionType::GreaterThan => {
            Ok(ordering(leaf.field_name(), &actual, &expected)? == Ordering::Greater)
        }
        RestrictionType::GreaterOrEqual => {
            Ok(ordering(leaf.field_name(), &actual, &expected)? != Ordering::Less)
        }
        RestrictionType::Like => text_test(ty, &actual, &expected, ci, |h, n| h.contains(n)),
        RestrictionType::NotLike => {
            text_test(ty, &actual, &expected, ci, |h, n| h.contains(n)).map(|hit| !hit)
        }
        RestrictionType::BeginsWith => {
            text_test(ty, &actual, &expected, ci, |h, n| h.starts_with(n))
        }
        RestrictionType::NotBeginWith => {
            text_test(ty, &actual, &expected, ci, |h, n| h.starts_with(n)).map(|hit| !hit)
        }
        RestrictionType::EndsWith => text_test(ty, &actual, &expected, ci, |h, n| h.ends_with(n)),
        RestrictionType::NotEndWith => {
            text_test(ty, &actual, &expected, ci, |h, n| h.ends_with(n)).map(|hit| !hit)
        }
        _ => Err(MatchError::UnsupportedCondition(ty)),
    }
}

fn match_double(
    leaf: &DoubleParamRestriction,
    row: &impl Row,
    cx: &MatchContext,
) -> Result<bool, MatchError> {
    let Some(actual) = row.value(leaf.field_name()) else {
        return Ok(false);
    };
    if actual.is_none() {
        return Ok(false);
    }

    let lower = resolve_operand(leaf.first_param(), row, cx)?;
    let upper = resolve_operand(leaf.second_param(), row, cx)?;

    // inclusive bounds
    let inside = ordering(leaf.field_name(), &actual, &lower)? != Ordering::Less
        && ordering(leaf.field_name(), &actual, &upper)? != Ordering::Greater;

    match leaf.condition_type().restriction_type() {
        RestrictionType::Between => Ok(inside),
        RestrictionType::NotBetween => Ok(!inside),
        _ => Err(MatchError::UnsupportedCondition(leaf.condition_type())),
    }
}

fn match_membership(leaf: &MultipleParamRestriction, row: &impl Row) -> bool {
    // an absent or null field satisfies neither the positive nor the
    // negated membership test
    let Some(actual) = row.value(leaf.field_name()) else {
        return false;
    };
    if actual.is_none() {
        return false;
    }

    let contained = leaf
        .params()
        .iter()
        .any(|candidate| value_eq(&actual, candidate, false));

    match leaf.condition_type() {
        FilterConditionType::NotAmongst => !contained,
        _ => contained,
    }
}

fn match_collection_size(
    leaf: &SingleParamRestriction,
    row: &impl Row,
    cx: &MatchContext,
) -> Result<bool, MatchError> {
    let Some(actual) = row.value(leaf.field_name()) else {
        return Ok(false);
    };
    let Some(len) = actual.list_len() else {
        return Err(MatchError::NotACollection(leaf.field_name().to_string()));
    };

    let bound = resolve_operand(leaf.param(), row, cx)?;
    let len = Value::BigInt(len as i128);
    let cmp = ordering(leaf.field_name(), &len, &bound)?;

    let hit = match leaf.condition_type().restriction_type() {
        RestrictionType::Equals => cmp == Ordering::Equal,
        RestrictionType::NotEquals => cmp != Ordering::Equal,
        RestrictionType::LessThan => cmp == Ordering::Less,
        RestrictionType::LessOrEqual => cmp != Ordering::Greater,
        RestrictionType::GreaterThan => cmp == Ordering::Greater,
        RestrictionType::GreaterOrEqual => cmp != Ordering::Less,
        _ => return Err(MatchError::UnsupportedCondition(leaf.condition_type())),
    };

    Ok(hit)
}

fn resolve_operand(
    operand: &Operand,
    row: &impl Row,
    cx: &MatchContext,
) -> Result<Value, MatchError> {
    match operand {
        Operand::Literal(value) => Ok(value.clone()),
        Operand::Field(name) => row
            .value(name)
            .ok_or_else(|| MatchError::MissingField(name.clone())),
        Operand::Param(name) => cx
            .param(name)
            .cloned()
            .ok_or_else(|| MatchError::UnknownParam(name.clone())),
        Operand::SessionParam(name) => cx
            .session_param(name)
            .cloned()
            .ok_or_else(|| MatchError::UnknownSessionParam(name.clone())),
    }
}

/// Equality across the semantic comparator. Values of incompatible
/// families are simply unequal; only ordering comparisons treat that as an
/// error.
fn value_eq(left: &Value, right: &Value, ci: bool) -> bool {
    if ci {
        if let (Some(a), Some(b)) = (left.as_text(), right.as_text()) {
            return a.to_lowercase() == b.to_lowercase();
        }
    }

    semantic_cmp(left, right) == Some(Ordering::Equal)
}

fn ordering(field: &str, left: &Value, right: &Value) -> Result<Ordering, MatchError> {
    semantic_cmp(left, right).ok_or_else(|| MatchError::Incomparable {
        field: field.to_string(),
    })
}

fn text_test(
    ty: FilterConditionType,
    actual: &Value,
    expected: &Value,
    ci: bool,
    test: fn(&str, &str) -> bool,
) -> Result<bool, MatchError> {
    let (Some(haystack), Some(needle)) = (actual.as_text(), expected.as_text()) else {
        return Err(MatchError::TextExpected(ty));
    };

    if ci {
        Ok(test(&haystack.to_lowercase(), &needle.to_lowercase()))
    } else {
        Ok(test(haystack, needle))
    }
}
