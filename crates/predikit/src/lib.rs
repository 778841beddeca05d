//! ## Crate layout
//! - `core`: restriction trees, the criteria builder, condition dispatch,
//!   translation, and in-memory matching.
//!
//! The `prelude` module mirrors the surface application code uses when
//! assembling and rendering query criteria.

pub use predikit_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use predikit_core::Error;

///
/// Prelude
///

pub mod prelude {
    pub use predikit_core::{
        criteria::{
            CompoundOp, CompoundRestriction, ConditionParams, CriteriaBuilder, FieldKind,
            FilterConditionType, FilterParamType, GroupBy, MatchContext, Operand, Order,
            OrderType, Restriction, RestrictionTranslator, RestrictionType, Row,
            SymbolResolver, TranslatorMapper, Update, matches, supported_conditions,
        },
        value::Value,
    };
}
