use crate::{
    criteria::{
        builder::CriteriaBuilder,
        restriction::Restriction,
        translate::{
            RestrictionTranslator, SymbolResolver, TranslateError, TranslatorMapper,
        },
    },
    error::Error,
    value::Value,
};

struct ProductMapper;

impl TranslatorMapper for ProductMapper {
    fn label(&self, field: &str) -> Option<String> {
        let label = match field {
            "name" => "Name",
            "description" => "Description",
            "costPrice" => "Cost Price",
            "salesPrice" => "Sales Price",
            _ => return None,
        };

        Some(label.to_string())
    }

    fn value(&self, _field: &str, _value: &Value) -> Option<String> {
        None
    }
}

fn translate(restriction: &Restriction) -> String {
    RestrictionTranslator::new()
        .translate(Some(restriction))
        .unwrap()
}

fn translate_mapped(restriction: &Restriction) -> String {
    RestrictionTranslator::new()
        .translate_with(Some(restriction), &ProductMapper)
        .unwrap()
}

#[test]
fn absent_restriction_renders_fetch_all() {
    assert_eq!(RestrictionTranslator::new().translate(None).unwrap(), "All");
}

#[test]
fn equals() {
    let r = Restriction::equals("name", "specs");
    assert_eq!(translate(&r), "name = 'specs'");
    assert_eq!(translate_mapped(&r), "Name = 'specs'");
}

#[test]
fn not_equals() {
    let r = Restriction::not_equals("name", "bandana");
    assert_eq!(translate(&r), "name != 'bandana'");
}

#[test]
fn ordering_symbols() {
    assert_eq!(
        translate(&Restriction::greater_than("costPrice", Value::try_from(10.5).unwrap())),
        "costPrice > 10.5"
    );
    assert_eq!(
        translate(&Restriction::greater_or_equal("salesPrice", 60)),
        "salesPrice >= 60"
    );
    assert_eq!(
        translate(&Restriction::less_than("costPrice", 20)),
        "costPrice < 20"
    );
    assert_eq!(
        translate(&Restriction::less_or_equal("costPrice", 20)),
        "costPrice <= 20"
    );
}

#[test]
fn text_matching_symbols() {
    assert_eq!(
        translate(&Restriction::like("description", "an")),
        "description like 'an'"
    );
    assert_eq!(
        translate(&Restriction::not_like("description", "an")),
        "description not like 'an'"
    );
    assert_eq!(
        translate(&Restriction::begins_with("description", "Blue")),
        "description starts with 'Blue'"
    );
    assert_eq!(
        translate(&Restriction::not_begin_with("description", "Blue")),
        "description not start with 'Blue'"
    );
    assert_eq!(
        translate(&Restriction::ends_with("description", "Red")),
        "description ends with 'Red'"
    );
    assert_eq!(
        translate(&Restriction::not_end_with("description", "Red")),
        "description not end with 'Red'"
    );
}

#[test]
fn case_insensitive_symbols_are_marked() {
    assert_eq!(
        translate(&Restriction::iequals("name", "specs")),
        "name = (ci) 'specs'"
    );
    assert_eq!(
        translate(&Restriction::ilike("description", "an")),
        "description like (ci) 'an'"
    );
}

#[test]
fn range_renders_both_bounds() {
    let r = Restriction::between("costPrice", 45, 50);
    assert_eq!(translate(&r), "costPrice between (45, 50)");
    assert_eq!(translate_mapped(&r), "Cost Price between (45, 50)");
    assert_eq!(
        translate(&Restriction::not_between("costPrice", 45, 50)),
        "costPrice not between (45, 50)"
    );
}

#[test]
fn presence_tests() {
    assert_eq!(translate(&Restriction::is_null("salesPrice")), "salesPrice is null");
    assert_eq!(
        translate(&Restriction::is_not_null("salesPrice")),
        "salesPrice is not null"
    );
}

#[test]
fn membership_lists_every_value() {
    let r = Restriction::amongst("name", ["specs", "pants"]);
    assert_eq!(translate(&r), "name in ('specs', 'pants')");
    assert_eq!(translate_mapped(&r), "Name in ('specs', 'pants')");
    assert_eq!(
        translate(&Restriction::not_amongst("name", ["specs", "pants"])),
        "name not in ('specs', 'pants')"
    );
}

#[test]
fn field_reference_operands_render_as_fields() {
    let r = Restriction::equals_field("costPrice", "salesPrice");
    assert_eq!(translate(&r), "costPrice = salesPrice");
    assert_eq!(translate_mapped(&r), "Cost Price = Sales Price");
}

#[test]
fn parameter_operands_render_with_markers() {
    assert_eq!(
        translate(&Restriction::equals_param("status", "wantedStatus")),
        "status = :wantedStatus"
    );
    assert_eq!(
        translate(&Restriction::equals_session_param("branch", "userBranch")),
        "branch = @userBranch"
    );
    assert_eq!(
        translate(&Restriction::between_param("age", "minAge", "maxAge")),
        "age between (:minAge, :maxAge)"
    );
}

#[test]
fn collection_size_symbols() {
    assert_eq!(
        translate(&Restriction::collection_size_greater_than("tags", 3)),
        "tags size > 3"
    );
}

#[test]
fn shallow_compound_is_not_parenthesized() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .add_between("costPrice", 45, 50)?
        .add_begins_with("description", "B")?
        .end_compound()?
        .build()?;

    let text = RestrictionTranslator::new().translate(Some(&root.into()))?;
    assert_eq!(
        text,
        "costPrice between (45, 50) AND description starts with 'B'"
    );
    Ok(())
}

#[test]
fn nested_compound_is_parenthesized() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("a", 1)?
        .begin_or()?
        .add_equals("b", 2)?
        .add_equals("c", 3)?
        .end_compound()?
        .end_compound()?
        .build()?;

    let text = RestrictionTranslator::new().translate(Some(&root.into()))?;
    assert_eq!(text, "a = 1 AND (b = 2 OR c = 3)");
    Ok(())
}

#[test]
fn deep_or_keeps_inner_grouping() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_or()?
        .begin_and()?
        .add_greater_than_equal("costPrice", 45)?
        .add_less_than_equal("costPrice", 50)?
        .end_compound()?
        .add_begins_with("description", "B")?
        .end_compound()?
        .build()?;

    let text =
        RestrictionTranslator::new().translate_with(Some(&root.into()), &ProductMapper)?;
    assert_eq!(
        text,
        "(Cost Price >= 45 AND Cost Price <= 50) OR Description starts with 'B'"
    );
    Ok(())
}

#[test]
fn end_to_end_build_then_translate() -> Result<(), Error> {
    let root = CriteriaBuilder::new()
        .begin_and()?
        .add_equals("status", "ACTIVE")?
        .add_greater_than("age", 18)?
        .end_compound()?
        .build()?;

    assert_eq!(root.size(), 2);
    let text = RestrictionTranslator::new().translate(Some(&root.into()))?;
    assert_eq!(text, "status = 'ACTIVE' AND age > 18");
    Ok(())
}

#[test]
fn value_mapper_overrides_literal_rendering() {
    struct StatusMapper;

    impl TranslatorMapper for StatusMapper {
        fn label(&self, _field: &str) -> Option<String> {
            None
        }

        fn value(&self, field: &str, value: &Value) -> Option<String> {
            if field == "status" && value == &Value::from("A") {
                return Some("Active".to_string());
            }

            None
        }
    }

    let text = RestrictionTranslator::new()
        .translate_with(Some(&Restriction::equals("status", "A")), &StatusMapper)
        .unwrap();
    assert_eq!(text, "status = 'Active'");
}

#[test]
fn missing_symbol_is_a_fatal_lookup_failure() {
    struct EmptyResolver;

    impl SymbolResolver for EmptyResolver {
        fn message(&self, _key: &str) -> Option<&str> {
            None
        }
    }

    let translator = RestrictionTranslator::with_resolver(EmptyResolver);
    let err = translator
        .translate(Some(&Restriction::equals("a", 1)))
        .unwrap_err();
    assert_eq!(err, TranslateError::UnknownSymbol("symbol.eq".to_string()));

    let err = translator.translate(None).unwrap_err();
    assert_eq!(
        err,
        TranslateError::UnknownSymbol("filter.fetch_all".to_string())
    );
}
