pub mod builder;
pub mod condition;
pub mod group;
pub mod lists;
pub mod matcher;
pub mod order;
pub mod restriction;
pub mod translate;
pub mod update;

#[cfg(test)]
mod tests;

// re-exports
pub use builder::{BuilderError, CriteriaBuilder};
pub use condition::{ConditionError, ConditionParams, FilterConditionType, FilterParamType, RestrictionType};
pub use group::GroupBy;
pub use lists::{FieldKind, supported_conditions};
pub use matcher::{MatchContext, MatchError, Row, matches};
pub use order::{Order, OrderPolicy, OrderType};
pub use restriction::{
    CompoundOp, CompoundRestriction, DoubleParamRestriction, MultipleParamRestriction, Operand,
    Restriction, SingleParamRestriction, ZeroParamRestriction,
};
pub use translate::{
    DefaultSymbols, RestrictionTranslator, SymbolResolver, TranslateError, TranslatorMapper,
};
pub use update::Update;
