//! regexp-extract-pushdown
//!
//! Lowers SQL `REGEXP_EXTRACT(str, pattern [, index])` calls into a native
//! expression: a regex transform chained onto a column reference when the
//! pattern and index are constants, or a generic function call otherwise.

mod config;
pub mod error;
pub mod eval;
pub mod expression;
pub mod extraction;
pub mod operand;
pub mod pattern_cache;
pub mod re;
pub mod signature;
pub mod translate;
pub mod udf;

pub use config::{InvalidPatternMode, RegexpExtractConfig};
pub use expression::NativeExpression;
pub use extraction::{
    ExtractionEvaluator, ExtractionTransform, RegexExtraction, SimpleExtraction,
};
pub use operand::{BasicOperandTranslator, OperandTranslator, PlannerContext};
pub use signature::{FunctionSignature, REGEXP_EXTRACT_SIGNATURE, TypeFamily};
pub use translate::{
    DEFAULT_INDEX, ExtractionShape, FUNCTION_NAME, RegexpExtractConversion, classify,
};
pub use udf::{regexp_extract_udf, regexp_extract_udf_with};
