use crate::{
    criteria::restriction::{
        CompoundOp, DoubleParamRestriction, MultipleParamRestriction, Operand, Restriction,
        SingleParamRestriction, ZeroParamRestriction,
    },
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// RestrictionType
///
/// Operator family, ignoring operand provenance: `EQ`, `EQ_FLD`, `EQ_PRM`
/// and `EQ_SSN` all classify as `Equals`. Consumers that only care about
/// the comparison semantics (SQL generation, UI grouping) key off this.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[remain::sorted]
pub enum RestrictionType {
    Amongst,
    And,
    BeginsWith,
    Between,
    EndsWith,
    Equals,
    GreaterOrEqual,
    GreaterThan,
    IsNotNull,
    IsNull,
    LessOrEqual,
    LessThan,
    Like,
    NotAmongst,
    NotBeginWith,
    NotBetween,
    NotEndWith,
    NotEquals,
    NotLike,
    Or,
}

impl RestrictionType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Amongst => "IN",
            Self::And => "AND",
            Self::BeginsWith => "BW",
            Self::Between => "BT",
            Self::EndsWith => "EW",
            Self::Equals => "EQ",
            Self::GreaterOrEqual => "GTE",
            Self::GreaterThan => "GT",
            Self::IsNotNull => "NNL",
            Self::IsNull => "NL",
            Self::LessOrEqual => "LTE",
            Self::LessThan => "LT",
            Self::Like => "LK",
            Self::NotAmongst => "NIN",
            Self::NotBeginWith => "NBW",
            Self::NotBetween => "NBT",
            Self::NotEndWith => "NEW",
            Self::NotEquals => "NEQ",
            Self::NotLike => "NLK",
            Self::Or => "OR",
        }
    }

    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Whether the family expresses the negation of another family.
    #[must_use]
    pub const fn is_negation(self) -> bool {
        matches!(
            self,
            Self::IsNotNull
                | Self::NotAmongst
                | Self::NotBeginWith
                | Self::NotBetween
                | Self::NotEndWith
                | Self::NotEquals
                | Self::NotLike
        )
    }
}

///
/// FilterParamType
///
/// What kind of input a filter control must collect for a condition:
/// nothing, an immediate literal, the name of another field, the name of a
/// bound parameter, the name of a session parameter, or a collection-size
/// bound.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum FilterParamType {
    None,
    Immediate,
    Field,
    Parameter,
    SessionParameter,
    Collection,
}

impl FilterParamType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "NON",
            Self::Immediate => "IMM",
            Self::Field => "FLD",
            Self::Parameter => "PRM",
            Self::SessionParameter => "SSN",
            Self::Collection => "COL",
        }
    }

    /// Whether the control collects a literal value (as opposed to a name
    /// reference or nothing at all).
    #[must_use]
    pub const fn accepts_value_input(self) -> bool {
        matches!(self, Self::Immediate | Self::Collection)
    }
}

///
/// FilterConditionType
///
/// Closed enumeration of every predicate operator the criteria system
/// understands. Each constant binds a short stable code, a restriction
/// family, a parameter classification, and message keys for UI labels and
/// translator symbols. Construction is dispatched exhaustively in
/// [`FilterConditionType::build_restriction`]; adding a constant without
/// extending the dispatch fails to compile.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum FilterConditionType {
    // zero-param
    IsNull,
    IsNotNull,
    // single-param, immediate literal
    Equals,
    IEquals,
    NotEquals,
    INotEquals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Like,
    ILike,
    NotLike,
    BeginsWith,
    IBeginsWith,
    NotBeginWith,
    EndsWith,
    IEndsWith,
    NotEndWith,
    // double-param, immediate literals
    Between,
    NotBetween,
    // multi-value
    Amongst,
    NotAmongst,
    // field-to-field
    EqualsField,
    NotEqualsField,
    LessThanField,
    LessOrEqualField,
    GreaterThanField,
    GreaterOrEqualField,
    LikeField,
    ILikeField,
    NotLikeField,
    BeginsWithField,
    IBeginsWithField,
    NotBeginWithField,
    EndsWithField,
    IEndsWithField,
    NotEndWithField,
    BetweenField,
    NotBetweenField,
    // parameter-bound
    EqualsParam,
    NotEqualsParam,
    LessThanParam,
    LessOrEqualParam,
    GreaterThanParam,
    GreaterOrEqualParam,
    LikeParam,
    ILikeParam,
    NotLikeParam,
    BeginsWithParam,
    IBeginsWithParam,
    NotBeginWithParam,
    EndsWithParam,
    IEndsWithParam,
    NotEndWithParam,
    BetweenParam,
    NotBetweenParam,
    // session-parameter
    EqualsSessionParam,
    NotEqualsSessionParam,
    // collection-size
    EqualsCollection,
    NotEqualsCollection,
    LessThanCollection,
    LessOrEqualCollection,
    GreaterThanCollection,
    GreaterOrEqualCollection,
    // compound
    And,
    Or,
}

impl FilterConditionType {
    /// Every condition type, in declaration order. UI layers enumerate this
    /// to populate condition dropdowns; `from_code`/`from_name` scan it.
    pub const ALL: &'static [Self] = &[
        Self::IsNull,
        Self::IsNotNull,
        Self::Equals,
        Self::IEquals,
        Self::NotEquals,
        Self::INotEquals,
        Self::LessThan,
        Self::LessOrEqual,
        Self::GreaterThan,
        Self::GreaterOrEqual,
        Self::Like,
        Self::ILike,
        Self::NotLike,
        Self::BeginsWith,
        Self::IBeginsWith,
        Self::NotBeginWith,
        Self::EndsWith,
        Self::IEndsWith,
        Self::NotEndWith,
        Self::Between,
        Self::NotBetween,
        Self::Amongst,
        Self::NotAmongst,
        Self::EqualsField,
        Self::NotEqualsField,
        Self::LessThanField,
        Self::LessOrEqualField,
        Self::GreaterThanField,
        Self::GreaterOrEqualField,
        Self::LikeField,
        Self::ILikeField,
        Self::NotLikeField,
        Self::BeginsWithField,
        Self::IBeginsWithField,
        Self::NotBeginWithField,
        Self::EndsWithField,
        Self::IEndsWithField,
        Self::NotEndWithField,
        Self::BetweenField,
        Self::NotBetweenField,
        Self::EqualsParam,
        Self::NotEqualsParam,
        Self::LessThanParam,
        Self::LessOrEqualParam,
        Self::GreaterThanParam,
        Self::GreaterOrEqualParam,
        Self::LikeParam,
        Self::ILikeParam,
        Self::NotLikeParam,
        Self::BeginsWithParam,
        Self::IBeginsWithParam,
        Self::NotBeginWithParam,
        Self::EndsWithParam,
        Self::IEndsWithParam,
        Self::NotEndWithParam,
        Self::BetweenParam,
        Self::NotBetweenParam,
        Self::EqualsSessionParam,
        Self::NotEqualsSessionParam,
        Self::EqualsCollection,
        Self::NotEqualsCollection,
        Self::LessThanCollection,
        Self::LessOrEqualCollection,
        Self::GreaterThanCollection,
        Self::GreaterOrEqualCollection,
        Self::And,
        Self::Or,
    ];

    /// Short stable code. Provenance variants suffix the family code:
    /// `_FLD` (field), `_PRM` (parameter), `_SSN` (session), `_COL`
    /// (collection size).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::IsNull => "NL",
            Self::IsNotNull => "NNL",
            Self::Equals => "EQ",
            Self::IEquals => "IEQ",
            Self::NotEquals => "NEQ",
            Self::INotEquals => "INEQ",
            Self::LessThan => "LT",
            Self::LessOrEqual => "LTE",
            Self::GreaterThan => "GT",
            Self::GreaterOrEqual => "GTE",
            Self::Like => "LK",
            Self::ILike => "ILK",
            Self::NotLike => "NLK",
            Self::BeginsWith => "BW",
            Self::IBeginsWith => "IBW",
            Self::NotBeginWith => "NBW",
            Self::EndsWith => "EW",
            Self::IEndsWith => "IEW",
            Self::NotEndWith => "NEW",
            Self::Between => "BT",
            Self::NotBetween => "NBT",
            Self::Amongst => "IN",
            Self::NotAmongst => "NIN",
            Self::EqualsField => "EQ_FLD",
            Self::NotEqualsField => "NEQ_FLD",
            Self::LessThanField => "LT_FLD",
            Self::LessOrEqualField => "LTE_FLD",
            Self::GreaterThanField => "GT_FLD",
            Self::GreaterOrEqualField => "GTE_FLD",
            Self::LikeField => "LK_FLD",
            Self::ILikeField => "ILK_FLD",
            Self::NotLikeField => "NLK_FLD",
            Self::BeginsWithField => "BW_FLD",
            Self::IBeginsWithField => "IBW_FLD",
            Self::NotBeginWithField => "NBW_FLD",
            Self::EndsWithField => "EW_FLD",
            Self::IEndsWithField => "IEW_FLD",
            Self::NotEndWithField => "NEW_FLD",
            Self::BetweenField => "BT_FLD",
            Self::NotBetweenField => "NBT_FLD",
            Self::EqualsParam => "EQ_PRM",
            Self::NotEqualsParam => "NEQ_PRM",
            Self::LessThanParam => "LT_PRM",
            Self::LessOrEqualParam => "LTE_PRM",
            Self::GreaterThanParam => "GT_PRM",
            Self::GreaterOrEqualParam => "GTE_PRM",
            Self::LikeParam => "LK_PRM",
            Self::ILikeParam => "ILK_PRM",
            Self::NotLikeParam => "NLK_PRM",
            Self::BeginsWithParam => "BW_PRM",
            Self::IBeginsWithParam => "IBW_PRM",
            Self::NotBeginWithParam => "NBW_PRM",
            Self::EndsWithParam => "EW_PRM",
            Self::IEndsWithParam => "IEW_PRM",
            Self::NotEndWithParam => "NEW_PRM",
            Self::BetweenParam => "BT_PRM",
            Self::NotBetweenParam => "NBT_PRM",
            Self::EqualsSessionParam => "EQ_SSN",
            Self::NotEqualsSessionParam => "NEQ_SSN",
            Self::EqualsCollection => "EQ_COL",
            Self::NotEqualsCollection => "NEQ_COL",
            Self::LessThanCollection => "LT_COL",
            Self::LessOrEqualCollection => "LTE_COL",
            Self::GreaterThanCollection => "GT_COL",
            Self::GreaterOrEqualCollection => "GTE_COL",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Canonical constant name, for configuration files that spell
    /// conditions out in full.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsNull => "IS_NULL",
            Self::IsNotNull => "IS_NOT_NULL",
            Self::Equals => "EQUALS",
            Self::IEquals => "IEQUALS",
            Self::NotEquals => "NOT_EQUALS",
            Self::INotEquals => "INOT_EQUALS",
            Self::LessThan => "LESS_THAN",
            Self::LessOrEqual => "LESS_OR_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterOrEqual => "GREATER_OR_EQUAL",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
            Self::NotLike => "NOT_LIKE",
            Self::BeginsWith => "BEGINS_WITH",
            Self::IBeginsWith => "IBEGINS_WITH",
            Self::NotBeginWith => "NOT_BEGIN_WITH",
            Self::EndsWith => "ENDS_WITH",
            Self::IEndsWith => "IENDS_WITH",
            Self::NotEndWith => "NOT_END_WITH",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT_BETWEEN",
            Self::Amongst => "AMONGST",
            Self::NotAmongst => "NOT_AMONGST",
            Self::EqualsField => "EQUALS_FIELD",
            Self::NotEqualsField => "NOT_EQUALS_FIELD",
            Self::LessThanField => "LESS_THAN_FIELD",
            Self::LessOrEqualField => "LESS_OR_EQUAL_FIELD",
            Self::GreaterThanField => "GREATER_THAN_FIELD",
            Self::GreaterOrEqualField => "GREATER_OR_EQUAL_FIELD",
            Self::LikeField => "LIKE_FIELD",
            Self::ILikeField => "ILIKE_FIELD",
            Self::NotLikeField => "NOT_LIKE_FIELD",
            Self::BeginsWithField => "BEGINS_WITH_FIELD",
            Self::IBeginsWithField => "IBEGINS_WITH_FIELD",
            Self::NotBeginWithField => "NOT_BEGIN_WITH_FIELD",
            Self::EndsWithField => "ENDS_WITH_FIELD",
            Self::IEndsWithField => "IENDS_WITH_FIELD",
            Self::NotEndWithField => "NOT_END_WITH_FIELD",
            Self::BetweenField => "BETWEEN_FIELD",
            Self::NotBetweenField => "NOT_BETWEEN_FIELD",
            Self::EqualsParam => "EQUALS_PARAM",
            Self::NotEqualsParam => "NOT_EQUALS_PARAM",
            Self::LessThanParam => "LESS_THAN_PARAM",
            Self::LessOrEqualParam => "LESS_OR_EQUAL_PARAM",
            Self::GreaterThanParam => "GREATER_THAN_PARAM",
            Self::GreaterOrEqualParam => "GREATER_OR_EQUAL_PARAM",
            Self::LikeParam => "LIKE_PARAM",
            Self::ILikeParam => "ILIKE_PARAM",
            Self::NotLikeParam => "NOT_LIKE_PARAM",
            Self::BeginsWithParam => "BEGINS_WITH_PARAM",
            Self::IBeginsWithParam => "IBEGINS_WITH_PARAM",
            Self::NotBeginWithParam => "NOT_BEGIN_WITH_PARAM",
            Self::EndsWithParam => "ENDS_WITH_PARAM",
            Self::IEndsWithParam => "IENDS_WITH_PARAM",
            Self::NotEndWithParam => "NOT_END_WITH_PARAM",
            Self::BetweenParam => "BETWEEN_PARAM",
            Self::NotBetweenParam => "NOT_BETWEEN_PARAM",
            Self::EqualsSessionParam => "EQUALS_SESSION_PARAM",
            Self::NotEqualsSessionParam => "NOT_EQUALS_SESSION_PARAM",
            Self::EqualsCollection => "EQUALS_COLLECTION",
            Self::NotEqualsCollection => "NOT_EQUALS_COLLECTION",
            Self::LessThanCollection => "LESS_THAN_COLLECTION",
            Self::LessOrEqualCollection => "LESS_OR_EQUAL_COLLECTION",
            Self::GreaterThanCollection => "GREATER_THAN_COLLECTION",
            Self::GreaterOrEqualCollection => "GREATER_OR_EQUAL_COLLECTION",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Look a condition up by its short code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.code() == code)
    }

    /// Look a condition up by its canonical constant name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.name() == name)
    }

    /// Operator family, ignoring operand provenance.
    #[must_use]
    pub const fn restriction_type(self) -> RestrictionType {
        match self {
            Self::IsNull => RestrictionType::IsNull,
            Self::IsNotNull => RestrictionType::IsNotNull,
            Self::Equals
            | Self::IEquals
            | Self::EqualsField
            | Self::EqualsParam
            | Self::EqualsSessionParam
            | Self::EqualsCollection => RestrictionType::Equals,
            Self::NotEquals
            | Self::INotEquals
            | Self::NotEqualsField
            | Self::NotEqualsParam
            | Self::NotEqualsSessionParam
            | Self::NotEqualsCollection => RestrictionType::NotEquals,
            Self::LessThan | Self::LessThanField | Self::LessThanParam | Self::LessThanCollection => {
                RestrictionType::LessThan
            }
            Self::LessOrEqual
            | Self::LessOrEqualField
            | Self::LessOrEqualParam
            | Self::LessOrEqualCollection => RestrictionType::LessOrEqual,
            Self::GreaterThan
            | Self::GreaterThanField
            | Self::GreaterThanParam
            | Self::GreaterThanCollection => RestrictionType::GreaterThan,
            Self::GreaterOrEqual
            | Self::GreaterOrEqualField
            | Self::GreaterOrEqualParam
            | Self::GreaterOrEqualCollection => RestrictionType::GreaterOrEqual,
            Self::Like | Self::ILike | Self::LikeField | Self::ILikeField | Self::LikeParam
            | Self::ILikeParam => RestrictionType::Like,
            Self::NotLike | Self::NotLikeField | Self::NotLikeParam => RestrictionType::NotLike,
            Self::BeginsWith
            | Self::IBeginsWith
            | Self::BeginsWithField
            | Self::IBeginsWithField
            | Self::BeginsWithParam
            | Self::IBeginsWithParam => RestrictionType::BeginsWith,
            Self::NotBeginWith | Self::NotBeginWithField | Self::NotBeginWithParam => {
                RestrictionType::NotBeginWith
            }
            Self::EndsWith
            | Self::IEndsWith
            | Self::EndsWithField
            | Self::IEndsWithField
            | Self::EndsWithParam
            | Self::IEndsWithParam => RestrictionType::EndsWith,
            Self::NotEndWith | Self::NotEndWithField | Self::NotEndWithParam => {
                RestrictionType::NotEndWith
            }
            Self::Between | Self::BetweenField | Self::BetweenParam => RestrictionType::Between,
            Self::NotBetween | Self::NotBetweenField | Self::NotBetweenParam => {
                RestrictionType::NotBetween
            }
            Self::Amongst => RestrictionType::Amongst,
            Self::NotAmongst => RestrictionType::NotAmongst,
            Self::And => RestrictionType::And,
            Self::Or => RestrictionType::Or,
        }
    }

    /// What kind of input a filter control collects for this condition.
    #[must_use]
    pub const fn param_type(self) -> FilterParamType {
        match self {
            Self::IsNull | Self::IsNotNull | Self::And | Self::Or => FilterParamType::None,
            Self::EqualsField
            | Self::NotEqualsField
            | Self::LessThanField
            | Self::LessOrEqualField
            | Self::GreaterThanField
            | Self::GreaterOrEqualField
            | Self::LikeField
            | Self::ILikeField
            | Self::NotLikeField
            | Self::BeginsWithField
            | Self::IBeginsWithField
            | Self::NotBeginWithField
            | Self::EndsWithField
            | Self::IEndsWithField
            | Self::NotEndWithField
            | Self::BetweenField
            | Self::NotBetweenField => FilterParamType::Field,
            Self::EqualsParam
            | Self::NotEqualsParam
            | Self::LessThanParam
            | Self::LessOrEqualParam
            | Self::GreaterThanParam
            | Self::GreaterOrEqualParam
            | Self::LikeParam
            | Self::ILikeParam
            | Self::NotLikeParam
            | Self::BeginsWithParam
            | Self::IBeginsWithParam
            | Self::NotBeginWithParam
            | Self::EndsWithParam
            | Self::IEndsWithParam
            | Self::NotEndWithParam
            | Self::BetweenParam
            | Self::NotBetweenParam => FilterParamType::Parameter,
            Self::EqualsSessionParam | Self::NotEqualsSessionParam => {
                FilterParamType::SessionParameter
            }
            Self::EqualsCollection
            | Self::NotEqualsCollection
            | Self::LessThanCollection
            | Self::LessOrEqualCollection
            | Self::GreaterThanCollection
            | Self::GreaterOrEqualCollection => FilterParamType::Collection,
            _ => FilterParamType::Immediate,
        }
    }

    /// UI label message key, derived from the code.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("condition.{}.label", self.code().to_ascii_lowercase())
    }

    /// Translator symbol message key. Provenance variants share the family
    /// symbol; case-insensitive and collection-size variants carry their
    /// own.
    #[must_use]
    pub const fn symbol_key(self) -> &'static str {
        match self {
            Self::IsNull => "symbol.nl",
            Self::IsNotNull => "symbol.nnl",
            Self::Equals | Self::EqualsField | Self::EqualsParam | Self::EqualsSessionParam => {
                "symbol.eq"
            }
            Self::IEquals => "symbol.ieq",
            Self::NotEquals
            | Self::NotEqualsField
            | Self::NotEqualsParam
            | Self::NotEqualsSessionParam => "symbol.neq",
            Self::INotEquals => "symbol.ineq",
            Self::LessThan | Self::LessThanField | Self::LessThanParam => "symbol.lt",
            Self::LessOrEqual | Self::LessOrEqualField | Self::LessOrEqualParam => "symbol.lte",
            Self::GreaterThan | Self::GreaterThanField | Self::GreaterThanParam => "symbol.gt",
            Self::GreaterOrEqual | Self::GreaterOrEqualField | Self::GreaterOrEqualParam => {
                "symbol.gte"
            }
            Self::Like | Self::LikeField | Self::LikeParam => "symbol.lk",
            Self::ILike | Self::ILikeField | Self::ILikeParam => "symbol.ilk",
            Self::NotLike | Self::NotLikeField | Self::NotLikeParam => "symbol.nlk",
            Self::BeginsWith | Self::BeginsWithField | Self::BeginsWithParam => "symbol.bw",
            Self::IBeginsWith | Self::IBeginsWithField | Self::IBeginsWithParam => "symbol.ibw",
            Self::NotBeginWith | Self::NotBeginWithField | Self::NotBeginWithParam => "symbol.nbw",
            Self::EndsWith | Self::EndsWithField | Self::EndsWithParam => "symbol.ew",
            Self::IEndsWith | Self::IEndsWithField | Self::IEndsWithParam => "symbol.iew",
            Self::NotEndWith | Self::NotEndWithField | Self::NotEndWithParam => "symbol.new",
            Self::Between | Self::BetweenField | Self::BetweenParam => "symbol.bt",
            Self::NotBetween | Self::NotBetweenField | Self::NotBetweenParam => "symbol.nbt",
            Self::Amongst => "symbol.in",
            Self::NotAmongst => "symbol.nin",
            Self::EqualsCollection => "symbol.eq_col",
            Self::NotEqualsCollection => "symbol.neq_col",
            Self::LessThanCollection => "symbol.lt_col",
            Self::LessOrEqualCollection => "symbol.lte_col",
            Self::GreaterThanCollection => "symbol.gt_col",
            Self::GreaterOrEqualCollection => "symbol.gte_col",
            Self::And => "symbol.and",
            Self::Or => "symbol.or",
        }
    }

    // --- shape classification ---

    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    #[must_use]
    pub const fn is_zero_param(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// Double-parameter (range) shape.
    #[must_use]
    pub const fn is_range(self) -> bool {
        matches!(
            self.restriction_type(),
            RestrictionType::Between | RestrictionType::NotBetween
        )
    }

    /// Multi-value (membership) shape.
    #[must_use]
    pub const fn is_amongst(self) -> bool {
        matches!(
            self.restriction_type(),
            RestrictionType::Amongst | RestrictionType::NotAmongst
        )
    }

    /// Single-parameter shape: everything that is not compound, zero-param,
    /// range, or membership.
    #[must_use]
    pub const fn is_single_param(self) -> bool {
        !self.is_compound() && !self.is_zero_param() && !self.is_range() && !self.is_amongst()
    }

    #[must_use]
    pub const fn is_field_comparison(self) -> bool {
        matches!(self.param_type(), FilterParamType::Field)
    }

    #[must_use]
    pub const fn is_parameter(self) -> bool {
        matches!(self.param_type(), FilterParamType::Parameter)
    }

    #[must_use]
    pub const fn is_session_parameter(self) -> bool {
        matches!(self.param_type(), FilterParamType::SessionParameter)
    }

    #[must_use]
    pub const fn is_collection_size(self) -> bool {
        matches!(self.param_type(), FilterParamType::Collection)
    }

    #[must_use]
    pub const fn is_case_insensitive(self) -> bool {
        matches!(
            self,
            Self::IEquals
                | Self::INotEquals
                | Self::ILike
                | Self::ILikeField
                | Self::ILikeParam
                | Self::IBeginsWith
                | Self::IBeginsWithField
                | Self::IBeginsWithParam
                | Self::IEndsWith
                | Self::IEndsWithField
                | Self::IEndsWithParam
        )
    }

    #[must_use]
    pub const fn is_negation(self) -> bool {
        self.restriction_type().is_negation()
    }

    /// Construct the standalone restriction for this condition from an
    /// arity-tagged parameter bundle. This is the single construction
    /// dispatch point; the criteria builder routes through it as well.
    pub fn build_restriction(
        self,
        field: impl Into<String>,
        params: ConditionParams,
    ) -> Result<Restriction, ConditionError> {
        let field = field.into();

        if self.is_compound() {
            return Err(ConditionError::NotSimple { ty: self });
        }

        if self.is_zero_param() {
            return match params {
                ConditionParams::None => {
                    Ok(Restriction::ZeroParam(ZeroParamRestriction::new(self, field)))
                }
                other => Err(self.arity_error("none", &other)),
            };
        }

        if self.is_amongst() {
            return match params {
                ConditionParams::Multiple(values) => Ok(Restriction::MultipleParam(
                    MultipleParamRestriction::new(self, field, values),
                )),
                other => Err(self.arity_error("a value collection", &other)),
            };
        }

        if self.is_range() {
            return match params {
                ConditionParams::Double(first, second) => {
                    let first = self.wrap_operand(first, "lower bound")?;
                    let second = self.wrap_operand(second, "upper bound")?;
                    Ok(Restriction::DoubleParam(DoubleParamRestriction::new(
                        self, field, first, second,
                    )))
                }
                other => Err(self.arity_error("two", &other)),
            };
        }

        match params {
            ConditionParams::Single(value) => {
                let param = self.wrap_operand(value, "counterpart")?;
                Ok(Restriction::SingleParam(SingleParamRestriction::new(
                    self, field, param,
                )))
            }
            other => Err(self.arity_error("one", &other)),
        }
    }

    /// Wrap a raw parameter value into the operand variant this condition's
    /// provenance demands. Field/parameter/session conditions require a
    /// text value naming the counterpart; collection-size conditions
    /// require an integer bound.
    fn wrap_operand(self, value: Value, role: &'static str) -> Result<Operand, ConditionError> {
        match self.param_type() {
            FilterParamType::Field => match value {
                Value::Text(name) => Ok(Operand::Field(name)),
                _ => Err(ConditionError::OperandKind { ty: self, role }),
            },
            FilterParamType::Parameter => match value {
                Value::Text(name) => Ok(Operand::Param(name)),
                _ => Err(ConditionError::OperandKind { ty: self, role }),
            },
            FilterParamType::SessionParameter => match value {
                Value::Text(name) => Ok(Operand::SessionParam(name)),
                _ => Err(ConditionError::OperandKind { ty: self, role }),
            },
            FilterParamType::Collection => match value {
                Value::Int(_) | Value::BigInt(_) => Ok(Operand::Literal(value)),
                _ => Err(ConditionError::OperandKind { ty: self, role: "size bound" }),
            },
            FilterParamType::None | FilterParamType::Immediate => Ok(Operand::Literal(value)),
        }
    }

    const fn arity_error(self, expected: &'static str, got: &ConditionParams) -> ConditionError {
        ConditionError::ParamArity {
            ty: self,
            expected,
            got: got.arity_label(),
        }
    }

    /// The compound operator for `And`/`Or`, if this is a compound type.
    #[must_use]
    pub const fn compound_op(self) -> Option<CompoundOp> {
        match self {
            Self::And => Some(CompoundOp::And),
            Self::Or => Some(CompoundOp::Or),
            _ => None,
        }
    }
}

impl fmt::Display for FilterConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FilterConditionType {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| ConditionError::UnknownCode(s.to_string()))
    }
}

///
/// ConditionParams
///
/// Arity-tagged parameter bundle handed to the construction dispatch.
/// Filter UIs collect operands as loose values; the dispatch validates
/// arity and provenance and produces the typed operand form.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ConditionParams {
    None,
    Single(Value),
    Double(Value, Value),
    Multiple(Vec<Value>),
}

impl ConditionParams {
    #[must_use]
    pub const fn arity_label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single(_) => "one",
            Self::Double(..) => "two",
            Self::Multiple(_) => "a value collection",
        }
    }
}

///
/// ConditionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConditionError {
    #[error("condition {ty} expects {expected} parameter(s), got {got}")]
    ParamArity {
        ty: FilterConditionType,
        expected: &'static str,
        got: &'static str,
    },
    #[error("condition {ty} expects a {role} of the matching kind")]
    OperandKind {
        ty: FilterConditionType,
        role: &'static str,
    },
    #[error("condition {ty} is compound; use the criteria builder to construct it")]
    NotSimple { ty: FilterConditionType },
    #[error("unknown condition code '{0}'")]
    UnknownCode(String),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_round_trip() {
        for ty in FilterConditionType::ALL {
            assert_eq!(FilterConditionType::from_code(ty.code()), Some(*ty));
            assert_eq!(FilterConditionType::from_name(ty.name()), Some(*ty));
        }
    }

    #[test]
    fn from_code_resolves_between() {
        assert_eq!(
            FilterConditionType::from_code("BT"),
            Some(FilterConditionType::Between)
        );
        assert_eq!(FilterConditionType::from_code("ZZ"), None);
    }

    #[test]
    fn parse_accepts_code_or_name() {
        assert_eq!(
            "NBW".parse::<FilterConditionType>().unwrap(),
            FilterConditionType::NotBeginWith
        );
        assert_eq!(
            "GREATER_OR_EQUAL_FIELD".parse::<FilterConditionType>().unwrap(),
            FilterConditionType::GreaterOrEqualField
        );
        assert!(matches!(
            "bogus".parse::<FilterConditionType>(),
            Err(ConditionError::UnknownCode(_))
        ));
    }

    #[test]
    fn provenance_classification() {
        assert_eq!(
            FilterConditionType::EqualsField.param_type(),
            FilterParamType::Field
        );
        assert_eq!(
            FilterConditionType::BetweenParam.param_type(),
            FilterParamType::Parameter
        );
        assert_eq!(
            FilterConditionType::EqualsSessionParam.param_type(),
            FilterParamType::SessionParameter
        );
        assert_eq!(
            FilterConditionType::LessThanCollection.param_type(),
            FilterParamType::Collection
        );
        assert_eq!(FilterConditionType::IsNull.param_type(), FilterParamType::None);
        assert_eq!(
            FilterConditionType::Amongst.param_type(),
            FilterParamType::Immediate
        );
    }

    #[test]
    fn family_ignores_provenance() {
        for ty in [
            FilterConditionType::Equals,
            FilterConditionType::EqualsField,
            FilterConditionType::EqualsParam,
            FilterConditionType::EqualsSessionParam,
            FilterConditionType::EqualsCollection,
        ] {
            assert_eq!(ty.restriction_type(), RestrictionType::Equals);
        }
    }

    #[test]
    fn shape_classification_is_partitioned() {
        for ty in FilterConditionType::ALL {
            let shapes = [
                ty.is_compound(),
                ty.is_zero_param(),
                ty.is_range(),
                ty.is_amongst(),
                ty.is_single_param(),
            ];
            assert_eq!(
                shapes.iter().filter(|hit| **hit).count(),
                1,
                "condition {ty} must classify into exactly one shape"
            );
        }
    }

    #[test]
    fn build_between_exposes_both_bounds() {
        let restriction = FilterConditionType::Between
            .build_restriction(
                "costPrice",
                ConditionParams::Double(Value::Int(45), Value::Int(50)),
            )
            .unwrap();

        match restriction {
            Restriction::DoubleParam(leaf) => {
                assert_eq!(leaf.first_param().as_value(), Some(&Value::Int(45)));
                assert_eq!(leaf.second_param().as_value(), Some(&Value::Int(50)));
            }
            other => panic!("expected a double-param leaf, got {other:?}"),
        }
    }

    #[test]
    fn build_rejects_wrong_arity() {
        let err = FilterConditionType::Between
            .build_restriction("a", ConditionParams::Single(Value::Int(1)))
            .unwrap_err();
        assert!(matches!(err, ConditionError::ParamArity { .. }));

        let err = FilterConditionType::IsNull
            .build_restriction("a", ConditionParams::Single(Value::Int(1)))
            .unwrap_err();
        assert!(matches!(err, ConditionError::ParamArity { .. }));
    }

    #[test]
    fn build_field_variant_requires_text_operand() {
        let restriction = FilterConditionType::EqualsField
            .build_restriction("a", ConditionParams::Single(Value::Text("b".to_string())))
            .unwrap();
        match restriction {
            Restriction::SingleParam(leaf) => {
                assert_eq!(leaf.param(), &Operand::Field("b".to_string()));
            }
            other => panic!("expected a single-param leaf, got {other:?}"),
        }

        let err = FilterConditionType::EqualsField
            .build_restriction("a", ConditionParams::Single(Value::Int(1)))
            .unwrap_err();
        assert!(matches!(err, ConditionError::OperandKind { .. }));
    }

    #[test]
    fn build_collection_variant_requires_integer_bound() {
        let err = FilterConditionType::GreaterThanCollection
            .build_restriction("tags", ConditionParams::Single(Value::Text("x".to_string())))
            .unwrap_err();
        assert!(matches!(err, ConditionError::OperandKind { .. }));
    }

    #[test]
    fn build_rejects_compound_types() {
        let err = FilterConditionType::And
            .build_restriction("a", ConditionParams::None)
            .unwrap_err();
        assert!(matches!(err, ConditionError::NotSimple { .. }));
    }
}
