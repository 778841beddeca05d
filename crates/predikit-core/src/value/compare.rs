use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator for deterministic collections and fingerprints.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only. This comparator never equates
/// values of different variants; use [`semantic_cmp`] for predicate
/// evaluation, which widens across the numeric family.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.rank().cmp(&right.rank());
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::BigInt(a), Value::BigInt(b)) => a.cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => canonical_cmp_list(a, b),
        (Value::None, Value::None) => Ordering::Equal,
        _ => Ordering::Equal,
    }
}

/// Comparator carrying predicate semantics.
///
/// Same-variant values compare directly; numeric variants compare after
/// widening (i64 → i128, exact integers vs f64 via f64 widening within the
/// 2^53 mantissa range, magnitude test outside it). Everything else is
/// incomparable and yields `None` so the caller can surface a typed error
/// instead of silently ordering apples against oranges.
#[must_use]
pub fn semantic_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::List(a), Value::List(b)) => semantic_cmp_list(a, b),
        _ if left.is_numeric() && right.is_numeric() => numeric_cmp(left, right),
        _ => None,
    }
}

const F64_EXACT: i128 = 1_i128 << 53;

fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Float64(a), _) => int_of(right).map(|b| float_int_cmp(a.get(), b).reverse()),
        (_, Value::Float64(b)) => int_of(left).map(|a| float_int_cmp(b.get(), a)),
        _ => match (int_of(left), int_of(right)) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        },
    }
}

const fn int_of(value: &Value) -> Option<i128> {
    match value {
        Value::Int(n) => Some(*n as i128),
        Value::BigInt(n) => Some(*n),
        _ => None,
    }
}

/// Compare an integer against a float without losing precision.
/// Returns the ordering of `int` relative to `float`.
fn float_int_cmp(float: f64, int: i128) -> Ordering {
    if int.abs() < F64_EXACT {
        // exactly representable; widen the integer
        #[allow(clippy::cast_precision_loss)]
        return (int as f64).total_cmp(&float);
    }

    // outside the exact range the float truncates cleanly to i128 territory
    if float >= F64_EXACT as f64 {
        if float > i128::MAX as f64 {
            return Ordering::Less;
        }
        #[allow(clippy::cast_possible_truncation)]
        return int.cmp(&(float as i128));
    }
    if float <= -(F64_EXACT as f64) {
        if float < i128::MIN as f64 {
            return Ordering::Greater;
        }
        #[allow(clippy::cast_possible_truncation)]
        return int.cmp(&(float as i128));
    }

    // |int| >= 2^53 while |float| < 2^53: the integer dominates
    if int > 0 { Ordering::Greater } else { Ordering::Less }
}

fn canonical_cmp_list(left: &[Value], right: &[Value]) -> Ordering {
    for (l, r) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(l, r);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn semantic_cmp_list(left: &[Value], right: &[Value]) -> Option<Ordering> {
    for (l, r) in left.iter().zip(right.iter()) {
        match semantic_cmp(l, r)? {
            Ordering::Equal => {}
            other => return Some(other),
        }
    }

    Some(left.len().cmp(&right.len()))
}
