use crate::criteria::condition::FilterConditionType;
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Coarse field typing used to decide which conditions a filter control
/// offers for a given entity column.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum FieldKind {
    Boolean,
    Number,
    Text,
    Enum,
    Collection,
}

/// Conditions applicable to a field of the given kind, in dropdown order.
#[must_use]
pub const fn supported_conditions(kind: FieldKind) -> &'static [FilterConditionType] {
    use FilterConditionType as C;

    match kind {
        FieldKind::Boolean => &[
            C::Equals,
            C::IsNull,
            C::IsNotNull,
            C::NotEquals,
            C::EqualsField,
            C::NotEqualsField,
        ],
        FieldKind::Number => &[
            C::Equals,
            C::GreaterThan,
            C::GreaterOrEqual,
            C::LessThan,
            C::LessOrEqual,
            C::Between,
            C::Amongst,
            C::IsNull,
            C::IsNotNull,
            C::NotEquals,
            C::NotBetween,
            C::NotAmongst,
            C::EqualsField,
            C::GreaterThanField,
            C::GreaterOrEqualField,
            C::LessThanField,
            C::LessOrEqualField,
            C::BetweenField,
            C::NotEqualsField,
            C::NotBetweenField,
        ],
        FieldKind::Text => &[
            C::Equals,
            C::BeginsWith,
            C::EndsWith,
            C::Like,
            C::Amongst,
            C::IsNull,
            C::IsNotNull,
            C::NotEquals,
            C::NotBeginWith,
            C::NotEndWith,
            C::NotLike,
            C::NotAmongst,
            C::EqualsField,
            C::BeginsWithField,
            C::EndsWithField,
            C::LikeField,
            C::NotEqualsField,
            C::NotBeginWithField,
            C::NotEndWithField,
            C::NotLikeField,
        ],
        FieldKind::Enum => &[
            C::Equals,
            C::Amongst,
            C::IsNull,
            C::IsNotNull,
            C::NotEquals,
            C::NotAmongst,
        ],
        FieldKind::Collection => &[
            C::EqualsCollection,
            C::GreaterThanCollection,
            C::GreaterOrEqualCollection,
            C::LessThanCollection,
            C::LessOrEqualCollection,
            C::IsNull,
            C::IsNotNull,
            C::NotEqualsCollection,
        ],
    }
}
