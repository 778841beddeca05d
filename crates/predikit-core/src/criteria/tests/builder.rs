use crate::{
    criteria::{
        builder::{BuilderError, CriteriaBuilder},
        restriction::{CompoundOp, Restriction},
    },
    error::Error,
    value::Value,
};
use std::collections::BTreeSet;

#[test]
fn root_size_counts_root_level_leaves() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("status", "ACTIVE")?
        .add_greater_than("age", 18)?
        .add_is_not_null("email")?
        .end_compound()?
        .build()?;

    assert_eq!(root.op(), CompoundOp::And);
    assert_eq!(root.size(), 3);
    Ok(())
}

#[test]
fn nested_compound_counts_as_one_root_child() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .begin_or()?
        .add_equals("a", 1)?
        .add_equals("b", 2)?
        .end_compound()?
        .add_equals("c", 3)?
        .end_compound()?
        .build()?;

    assert_eq!(root.size(), 2);
    match &root.restrictions()[0] {
        Restriction::Compound(inner) => {
            assert_eq!(inner.op(), CompoundOp::Or);
            assert_eq!(inner.size(), 2);
        }
        other => panic!("expected nested compound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn end_compound_rejects_empty_compound() {
    let err = CriteriaBuilder::new()
        .begin_and()
        .unwrap()
        .end_compound()
        .unwrap_err();
    assert_eq!(err, BuilderError::EmptyCompound);
}

#[test]
fn end_compound_without_begin_fails() {
    let err = CriteriaBuilder::new().end_compound().unwrap_err();
    assert_eq!(err, BuilderError::CompoundNotStarted);
}

#[test]
fn add_outside_compound_fails() {
    let err = CriteriaBuilder::new().add_equals("a", 1).unwrap_err();
    assert_eq!(err, BuilderError::CompoundNotStarted);
}

#[test]
fn second_root_is_rejected() -> Result<(), Error> {
    let builder = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("a", 1)?
        .end_compound()?;

    let err = builder.begin_or().unwrap_err();
    assert_eq!(err, BuilderError::RootAlreadyEstablished);
    Ok(())
}

#[test]
fn add_after_root_is_rejected() -> Result<(), Error> {
    let builder = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("a", 1)?
        .end_compound()?;

    let err = builder.add_equals("b", 2).unwrap_err();
    assert_eq!(err, BuilderError::RootAlreadyEstablished);
    Ok(())
}

#[test]
fn build_without_root_fails() {
    let err = CriteriaBuilder::new().build().unwrap_err();
    assert_eq!(err, BuilderError::RootNotEstablished);

    // an open, unclosed compound is not a root either
    let err = CriteriaBuilder::new()
        .begin_and()
        .unwrap()
        .add_equals("a", 1)
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err, BuilderError::RootNotEstablished);
}

#[test]
fn restricted_fields_ignore_nesting_depth() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .begin_or()?
        .add_equals("a", 1)?
        .add_equals("b", 2)?
        .end_compound()?
        .add_equals("c", 3)?
        .end_compound()?
        .build()?;

    let mut bucket = BTreeSet::new();
    root.write_restricted_fields(&mut bucket);
    let expected: BTreeSet<String> =
        ["a", "b", "c"].iter().map(ToString::to_string).collect();
    assert_eq!(bucket, expected);
    Ok(())
}

#[test]
fn restricted_fields_include_operand_side_references() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals_field("created", "updated")?
        .add_between_field("price", "floor", "ceiling")?
        .end_compound()?
        .build()?;

    let mut bucket = BTreeSet::new();
    root.write_restricted_fields(&mut bucket);
    for field in ["created", "updated", "price", "floor", "ceiling"] {
        assert!(bucket.contains(field), "missing {field}");
        assert!(Restriction::Compound(root.clone()).is_restricted_field(field));
    }
    Ok(())
}

#[test]
fn replace_all_hits_every_depth() -> Result<(), Error> {
    let mut root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("x", "old1")?
        .begin_or()?
        .add_equals("x", "old2")?
        .add_equals("y", "keep")?
        .end_compound()?
        .end_compound()?
        .build()?;

    assert!(root.replace_all("x", &Value::from("new")));

    let mut seen = 0;
    collect_single_params(&root.clone().into(), &mut |leaf_field, value| {
        if leaf_field == "x" {
            assert_eq!(value, Some(&Value::from("new")));
            seen += 1;
        } else {
            assert_eq!(value, Some(&Value::from("keep")));
        }
    });
    assert_eq!(seen, 2);

    assert!(!root.replace_all("missing", &Value::from("nope")));
    Ok(())
}

#[test]
fn replace_all_range_and_amongst() -> Result<(), Error> {
    let mut root = CriteriaBuilder::new()
        .begin_and()?
        .add_between("age", 10, 20)?
        .add_amongst("status", ["NEW", "OPEN"])?
        .end_compound()?
        .build()?;

    assert!(root.replace_all_range("age", &Value::Int(30), &Value::Int(40)));
    assert!(root.replace_all_amongst("status", &[Value::from("CLOSED")]));
    assert!(!root.replace_all_range("status", &Value::Int(0), &Value::Int(1)));

    match &root.restrictions()[0] {
        Restriction::DoubleParam(leaf) => {
            assert_eq!(leaf.first_param().as_value(), Some(&Value::Int(30)));
            assert_eq!(leaf.second_param().as_value(), Some(&Value::Int(40)));
        }
        other => panic!("expected range leaf, got {other:?}"),
    }
    match &root.restrictions()[1] {
        Restriction::MultipleParam(leaf) => {
            assert_eq!(leaf.params(), &[Value::from("CLOSED")]);
        }
        other => panic!("expected membership leaf, got {other:?}"),
    }
    Ok(())
}

#[test]
fn replace_all_preserves_non_literal_operands() -> Result<(), Error> {
    let mut root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals_field("x", "other")?
        .end_compound()?
        .build()?;

    // a field-reference operand keeps its provenance
    assert!(!root.replace_all("x", &Value::from("literal")));
    Ok(())
}

fn collect_single_params(
    restriction: &Restriction,
    visit: &mut impl FnMut(&str, Option<&Value>),
) {
    match restriction {
        Restriction::SingleParam(leaf) => visit(leaf.field_name(), leaf.param().as_value()),
        Restriction::Compound(compound) => {
            for child in compound.restrictions() {
                collect_single_params(child, visit);
            }
        }
        _ => {}
    }
}
