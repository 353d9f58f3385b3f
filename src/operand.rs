//! Operand translation: turning one call operand into a [`NativeExpression`].

use crate::config::RegexpExtractConfig;
use crate::expression::NativeExpression;
use crate::extraction::ExtractionEvaluator;
use crate::signature::{REGEXP_EXTRACT_SIGNATURE, family_of};
use crate::translate::RegexpExtractConversion;
use datafusion::arrow::datatypes::Schema;
use datafusion::logical_expr::Expr;

/// Ambient planning state shared by every translation in one query.
#[derive(Debug, Clone, Default)]
pub struct PlannerContext {
    config: RegexpExtractConfig,
}

impl PlannerContext {
    pub fn new(config: RegexpExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegexpExtractConfig {
        &self.config
    }

    /// Evaluator for extraction chains produced under this context.
    pub fn evaluator(&self) -> ExtractionEvaluator {
        ExtractionEvaluator::new(&self.config)
    }
}

/// Translates a single operand; `None` means the operand cannot be expressed.
pub trait OperandTranslator {
    fn translate_operand(
        &self,
        ctx: &PlannerContext,
        schema: &Schema,
        operand: &Expr,
    ) -> Option<NativeExpression>;
}

impl<F> OperandTranslator for F
where
    F: Fn(&PlannerContext, &Schema, &Expr) -> Option<NativeExpression>,
{
    fn translate_operand(
        &self,
        ctx: &PlannerContext,
        schema: &Schema,
        operand: &Expr,
    ) -> Option<NativeExpression> {
        self(ctx, schema, operand)
    }
}

/// Handles columns, literals, aliases and nested `regexp_extract` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicOperandTranslator;

impl OperandTranslator for BasicOperandTranslator {
    fn translate_operand(
        &self,
        ctx: &PlannerContext,
        schema: &Schema,
        operand: &Expr,
    ) -> Option<NativeExpression> {
        match operand {
            Expr::Column(c) => {
                let field = schema.field_with_name(&c.name).ok()?;
                // only string and integer columns have a native reference
                family_of(field.data_type())?;
                Some(NativeExpression::column(c.name.clone()))
            }
            Expr::Literal(value, ..) => Some(NativeExpression::literal(value.clone())),
            Expr::Alias(alias) => self.translate_operand(ctx, schema, &alias.expr),
            Expr::ScalarFunction(f) if REGEXP_EXTRACT_SIGNATURE.matches_name(f.name()) => {
                RegexpExtractConversion.translate(ctx, schema, &f.args, self)
            }
            _ => None,
        }
    }
}
