//! Lowering of `REGEXP_EXTRACT(str, pattern [, index])` calls.
//!
//! A call whose pattern is a string literal, and whose index is either
//! omitted or an integer literal, becomes a regex transform appended to the
//! subject's extraction chain. Every other call becomes a generic
//! `regexp_extract(str, pattern, index)` function expression.

use crate::expression::NativeExpression;
use crate::extraction::{ExtractionTransform, RegexExtraction};
use crate::operand::{OperandTranslator, PlannerContext};
use crate::signature::{FunctionSignature, REGEXP_EXTRACT_SIGNATURE};
use datafusion::arrow::datatypes::Schema;
use datafusion::common::ScalarValue;
use datafusion::logical_expr::Expr;

/// Capture group used when the call omits the index operand.
pub const DEFAULT_INDEX: i32 = 0;

/// Name of the native function the generic path calls.
pub const FUNCTION_NAME: &str = "regexp_extract";

/// How a call lowers, decided from the literalness of pattern and index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionShape {
    Specialized { pattern: String, index: i32 },
    Generic,
}

fn literal_value(e: &Expr) -> Option<&ScalarValue> {
    match e {
        Expr::Literal(value, ..) => Some(value),
        _ => None,
    }
}

pub fn is_literal(e: &Expr) -> bool {
    literal_value(e).is_some()
}

/// Value of a non-null string literal.
pub fn literal_string(e: &Expr) -> Option<&str> {
    match literal_value(e)? {
        ScalarValue::Utf8(Some(s))
        | ScalarValue::LargeUtf8(Some(s))
        | ScalarValue::Utf8View(Some(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// Value of a non-null integer literal that fits in `i32`.
pub fn literal_int(e: &Expr) -> Option<i32> {
    match *literal_value(e)? {
        ScalarValue::Int8(Some(v)) => Some(i32::from(v)),
        ScalarValue::Int16(Some(v)) => Some(i32::from(v)),
        ScalarValue::Int32(Some(v)) => Some(v),
        ScalarValue::Int64(Some(v)) => i32::try_from(v).ok(),
        ScalarValue::UInt8(Some(v)) => Some(i32::from(v)),
        ScalarValue::UInt16(Some(v)) => Some(i32::from(v)),
        ScalarValue::UInt32(Some(v)) => i32::try_from(v).ok(),
        ScalarValue::UInt64(Some(v)) => i32::try_from(v).ok(),
        _ => None,
    }
}

/// Picks the lowering for `args`. Only the pattern and index operands take
/// part; the subject may be anything.
pub fn classify(args: &[Expr]) -> ExtractionShape {
    let Some(pattern) = args.get(1).and_then(literal_string) else {
        return ExtractionShape::Generic;
    };
    let index = match args.get(2) {
        None => Some(DEFAULT_INDEX),
        Some(node) => literal_int(node),
    };
    match index {
        Some(index) => ExtractionShape::Specialized {
            pattern: pattern.to_owned(),
            index,
        },
        None => ExtractionShape::Generic,
    }
}

fn default_index() -> NativeExpression {
    NativeExpression::literal(ScalarValue::Int32(Some(DEFAULT_INDEX)))
}

/// Translator for `REGEXP_EXTRACT` calls. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexpExtractConversion;

impl RegexpExtractConversion {
    pub fn signature(&self) -> &'static FunctionSignature {
        &REGEXP_EXTRACT_SIGNATURE
    }

    /// Lowers a call given its operands. `None` when any operand fails to
    /// translate or the operand count is outside the signature.
    pub fn translate<T>(
        &self,
        ctx: &PlannerContext,
        schema: &Schema,
        args: &[Expr],
        operands: &T,
    ) -> Option<NativeExpression>
    where
        T: OperandTranslator + ?Sized,
    {
        if !self.signature().accepts_arity(args.len()) {
            return None;
        }

        let input = operands.translate_operand(ctx, schema, &args[0])?;
        let pattern = operands.translate_operand(ctx, schema, &args[1])?;
        let index = match args.get(2) {
            Some(node) => operands.translate_operand(ctx, schema, node)?,
            None => default_index(),
        };

        if let ExtractionShape::Specialized {
            pattern: expr,
            index: group,
        } = classify(args)
        {
            let transform = ExtractionTransform::Regex(RegexExtraction::new(expr, group));
            if let Some(chained) = input.chain(transform) {
                log::trace!("regexp_extract: chained extraction onto {input}");
                return Some(chained);
            }
            log::debug!(
                "regexp_extract: subject {input} is not a column reference, using function call"
            );
        }

        Some(NativeExpression::function_call(
            FUNCTION_NAME,
            vec![input, pattern, index],
        ))
    }

    /// Lowers a whole expression if it is a `REGEXP_EXTRACT` call.
    pub fn translate_call<T>(
        &self,
        ctx: &PlannerContext,
        schema: &Schema,
        expr: &Expr,
        operands: &T,
    ) -> Option<NativeExpression>
    where
        T: OperandTranslator + ?Sized,
    {
        match expr {
            Expr::Alias(alias) => self.translate_call(ctx, schema, &alias.expr, operands),
            Expr::ScalarFunction(f) if self.signature().matches_name(f.name()) => {
                self.translate(ctx, schema, &f.args, operands)
            }
            _ => None,
        }
    }
}
