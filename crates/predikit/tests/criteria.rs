//! End-to-end smoke test over the public prelude: build, interrogate,
//! re-parameterize, translate, and match one criteria tree.

use predikit::prelude::*;
use std::collections::BTreeMap;

fn order_row(status: &str, total: i64) -> BTreeMap<String, Value> {
    let mut row = BTreeMap::new();
    row.insert("status".to_string(), Value::from(status));
    row.insert("total".to_string(), Value::Int(total));
    row
}

#[test]
fn build_translate_match() -> Result<(), predikit::Error> {
    let mut root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("status", "OPEN")?
        .begin_or()?
        .add_greater_than("total", 100)?
        .add_equals("status", "VIP")?
        .end_compound()?
        .end_compound()?
        .build()?;

    assert_eq!(root.size(), 2);

    let text = RestrictionTranslator::new().translate(Some(&root.clone().into()))?;
    assert_eq!(text, "status = 'OPEN' AND (total > 100 OR status = 'VIP')");

    let cx = MatchContext::new();
    assert!(matches(&root.clone().into(), &order_row("OPEN", 250), &cx)?);
    assert!(!matches(&root.clone().into(), &order_row("OPEN", 50), &cx)?);
    assert!(!matches(&root.clone().into(), &order_row("CLOSED", 250), &cx)?);

    // reuse the same tree with a different binding
    assert!(root.replace_all("status", &Value::from("CLOSED")));
    assert!(matches(&root.into(), &order_row("CLOSED", 250), &cx)?);
    Ok(())
}

#[test]
fn condition_lookup_drives_construction() -> Result<(), predikit::Error> {
    let ty = FilterConditionType::from_code("BT").expect("BT is registered");
    let restriction = ty.build_restriction(
        "total",
        ConditionParams::Double(Value::Int(10), Value::Int(20)),
    )?;

    let text = RestrictionTranslator::new().translate(Some(&restriction))?;
    assert_eq!(text, "total between (10, 20)");
    Ok(())
}

#[test]
fn dropdown_lists_stay_within_the_closed_set() {
    for kind in [
        FieldKind::Boolean,
        FieldKind::Number,
        FieldKind::Text,
        FieldKind::Enum,
        FieldKind::Collection,
    ] {
        let conditions = supported_conditions(kind);
        assert!(!conditions.is_empty());
        for ty in conditions {
            assert!(FilterConditionType::from_code(ty.code()).is_some());
        }
    }
}
