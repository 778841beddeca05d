use crate::{
    criteria::{
        condition::FilterConditionType,
        restriction::{CompoundRestriction, Operand, Restriction},
    },
    value::Value,
};
use std::fmt::Write as _;
use thiserror::Error as ThisError;

/// Message key rendered for an absent restriction ("fetch everything").
pub const FETCH_ALL_KEY: &str = "filter.fetch_all";

///
/// SymbolResolver
///
/// Resolves message keys to display text. The default implementation is an
/// English table; localized deployments supply their own resolver backed by
/// a message bundle.
///

pub trait SymbolResolver {
    fn message(&self, key: &str) -> Option<&str>;
}

///
/// DefaultSymbols
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSymbols;

impl SymbolResolver for DefaultSymbols {
    fn message(&self, key: &str) -> Option<&str> {
        let text = match key {
            FETCH_ALL_KEY => "All",
            "symbol.eq" => "=",
            "symbol.ieq" => "= (ci)",
            "symbol.neq" => "!=",
            "symbol.ineq" => "!= (ci)",
            "symbol.lt" => "<",
            "symbol.lte" => "<=",
            "symbol.gt" => ">",
            "symbol.gte" => ">=",
            "symbol.lk" => "like",
            "symbol.ilk" => "like (ci)",
            "symbol.nlk" => "not like",
            "symbol.bw" => "starts with",
            "symbol.ibw" => "starts with (ci)",
            "symbol.nbw" => "not start with",
            "symbol.ew" => "ends with",
            "symbol.iew" => "ends with (ci)",
            "symbol.new" => "not end with",
            "symbol.bt" => "between",
            "symbol.nbt" => "not between",
            "symbol.in" => "in",
            "symbol.nin" => "not in",
            "symbol.nl" => "is null",
            "symbol.nnl" => "is not null",
            "symbol.eq_col" => "size =",
            "symbol.neq_col" => "size !=",
            "symbol.lt_col" => "size <",
            "symbol.lte_col" => "size <=",
            "symbol.gt_col" => "size >",
            "symbol.gte_col" => "size >=",
            "symbol.and" => "AND",
            "symbol.or" => "OR",
            _ => return None,
        };

        Some(text)
    }
}

///
/// TranslatorMapper
///
/// Optional relabeling hook: maps raw field names to display labels and
/// raw parameter values to display text. A `None` from either method falls
/// back to the default rendering.
///

pub trait TranslatorMapper {
    fn label(&self, field: &str) -> Option<String>;

    fn value(&self, field: &str, value: &Value) -> Option<String>;
}

///
/// TranslateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TranslateError {
    #[error("no message registered for key '{0}'")]
    UnknownSymbol(String),
}

///
/// RestrictionTranslator
///
/// Renders a restriction tree back to readable text: field, localized
/// operator symbol, and parameters. Nested compounds below the top level
/// are parenthesized so the rendered text preserves logical grouping.
///

#[derive(Clone, Debug, Default)]
pub struct RestrictionTranslator<R = DefaultSymbols> {
    resolver: R,
}

impl RestrictionTranslator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolver: DefaultSymbols,
        }
    }
}

impl<R: SymbolResolver> RestrictionTranslator<R> {
    #[must_use]
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Translate a restriction tree; `None` renders the fetch-all message.
    pub fn translate(&self, restriction: Option<&Restriction>) -> Result<String, TranslateError> {
        self.run(restriction, None)
    }

    /// Translate with field/value relabeling.
    pub fn translate_with(
        &self,
        restriction: Option<&Restriction>,
        mapper: &dyn TranslatorMapper,
    ) -> Result<String, TranslateError> {
        self.run(restriction, Some(mapper))
    }

    fn run(
        &self,
        restriction: Option<&Restriction>,
        mapper: Option<&dyn TranslatorMapper>,
    ) -> Result<String, TranslateError> {
        let Some(restriction) = restriction else {
            return self.message(FETCH_ALL_KEY).map(str::to_string);
        };

        let mut out = String::new();
        self.render(&mut out, restriction, mapper, 0)?;
        Ok(out)
    }

    fn render(
        &self,
        out: &mut String,
        restriction: &Restriction,
        mapper: Option<&dyn TranslatorMapper>,
        depth: usize,
    ) -> Result<(), TranslateError> {
        match restriction {
            Restriction::ZeroParam(leaf) => {
                self.write_field(out, leaf.field_name(), mapper);
                out.push(' ');
                out.push_str(self.symbol(leaf.condition_type())?);
            }
            Restriction::SingleParam(leaf) => {
                let field = leaf.field_name();
                self.write_field(out, field, mapper);
                out.push(' ');
                out.push_str(self.symbol(leaf.condition_type())?);
                out.push(' ');
                self.write_operand(out, field, leaf.param(), mapper);
            }
            Restriction::DoubleParam(leaf) => {
                let field = leaf.field_name();
                self.write_field(out, field, mapper);
                out.push(' ');
                out.push_str(self.symbol(leaf.condition_type())?);
                out.push_str(" (");
                self.write_operand(out, field, leaf.first_param(), mapper);
                out.push_str(", ");
                self.write_operand(out, field, leaf.second_param(), mapper);
                out.push(')');
            }
            Restriction::MultipleParam(leaf) => {
                let field = leaf.field_name();
                self.write_field(out, field, mapper);
                out.push(' ');
                out.push_str(self.symbol(leaf.condition_type())?);
                out.push_str(" (");
                for (i, value) in leaf.params().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_value(out, field, value, mapper);
                }
                out.push(')');
            }
            Restriction::Compound(compound) => {
                self.render_compound(out, compound, mapper, depth)?;
            }
        }

        Ok(())
    }

    fn render_compound(
        &self,
        out: &mut String,
        compound: &CompoundRestriction,
        mapper: Option<&dyn TranslatorMapper>,
        depth: usize,
    ) -> Result<(), TranslateError> {
        let nested = depth > 0;
        if nested {
            out.push('(');
        }

        let symbol = self.symbol(compound.condition_type())?;
        for (i, child) in compound.restrictions().iter().enumerate() {
            if i > 0 {
                let _ = write!(out, " {symbol} ");
            }
            self.render(out, child, mapper, depth + 1)?;
        }

        if nested {
            out.push(')');
        }

        Ok(())
    }

    fn write_field(&self, out: &mut String, field: &str, mapper: Option<&dyn TranslatorMapper>) {
        match mapper.and_then(|m| m.label(field)) {
            Some(label) => out.push_str(&label),
            None => out.push_str(field),
        }
    }

    fn write_operand(
        &self,
        out: &mut String,
        field: &str,
        operand: &Operand,
        mapper: Option<&dyn TranslatorMapper>,
    ) {
        match operand {
            Operand::Literal(value) => self.write_value(out, field, value, mapper),
            Operand::Field(name) => self.write_field(out, name, mapper),
            Operand::Param(name) => {
                out.push(':');
                out.push_str(name);
            }
            Operand::SessionParam(name) => {
                out.push('@');
                out.push_str(name);
            }
        }
    }

    /// Literal rendering: text is single-quoted, everything else uses the
    /// value's display form. A mapper-supplied translation is rendered
    /// quoted, matching the text convention.
    fn write_value(
        &self,
        out: &mut String,
        field: &str,
        value: &Value,
        mapper: Option<&dyn TranslatorMapper>,
    ) {
        if let Some(mapped) = mapper.and_then(|m| m.value(field, value)) {
            out.push('\'');
            out.push_str(&mapped);
            out.push('\'');
            return;
        }

        match value {
            Value::Text(text) => {
                out.push('\'');
                out.push_str(text);
                out.push('\'');
            }
            other => {
                let _ = write!(out, "{other}");
            }
        }
    }

    fn symbol(&self, ty: FilterConditionType) -> Result<&str, TranslateError> {
        self.message(ty.symbol_key())
    }

    fn message(&self, key: &str) -> Result<&str, TranslateError> {
        self.resolver
            .message(key)
            .ok_or_else(|| TranslateError::UnknownSymbol(key.to_string()))
    }
}
