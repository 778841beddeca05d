//! Core runtime for Predikit: restriction trees, the stack-protocol
//! criteria builder, condition-type dispatch, human-readable translation,
//! and in-memory matching.

pub mod criteria;
pub mod error;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, resolvers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        criteria::{
            CompoundOp, CompoundRestriction, ConditionParams, CriteriaBuilder,
            FilterConditionType, FilterParamType, GroupBy, Operand, Order, OrderType, Restriction,
            RestrictionTranslator, RestrictionType, Update,
        },
        value::Value,
    };
}
