use crate::criteria::{
    builder::BuilderError, condition::ConditionError, matcher::MatchError,
    translate::TranslateError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Aggregate error for callers that drive several criteria surfaces at
/// once (construct, translate, match). Each subsystem keeps its own typed
/// error; this wrapper exists so application code can `?` across them.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Condition(#[from] ConditionError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Match(#[from] MatchError),
}
