//! Row-wise evaluation of the generic `regexp_extract(str, pattern[, idx])` call.

use crate::config::RegexpExtractConfig;
use crate::extraction::{ExtractionEvaluator, RegexExtraction};
use crate::translate::DEFAULT_INDEX;
use datafusion::arrow::array::{Array, ArrayRef, AsArray, StringBuilder};
use datafusion::arrow::compute::{CastOptions, cast, cast_with_options};
use datafusion::arrow::datatypes::{DataType, Int64Type};
use datafusion::common::{DataFusionError, Result, exec_err};
use datafusion::logical_expr::{ColumnarValue, ScalarFunctionArgs};
use std::sync::Arc;

pub fn evaluate_regexp_extract_with(
    args: ScalarFunctionArgs,
    cfg: &RegexpExtractConfig,
) -> Result<ColumnarValue> {
    let rows = args.number_rows;

    // Materialize to arrays (handles scalars by expanding to length `rows`)
    let arrays = args
        .args
        .iter()
        .map(|cv| cv.to_array(rows))
        .collect::<Result<Vec<ArrayRef>>>()?;

    let (s_arr, p_arr, i_arr) = match arrays.as_slice() {
        [s, p] => (s, p, None),
        [s, p, i] => (s, p, Some(i)),
        other => {
            return exec_err!(
                "regexp_extract expects 2 or 3 arguments, got {}",
                other.len()
            );
        }
    };

    // Normalize widths so one loop covers Utf8/LargeUtf8/Utf8View and all integer types
    let s_arr = cast(s_arr, &DataType::Utf8)?;
    let p_arr = cast(p_arr, &DataType::Utf8)?;
    // unsafe cast so an unsigned idx beyond i64 errors instead of turning NULL
    let strict = CastOptions {
        safe: false,
        ..Default::default()
    };
    let i_arr = i_arr
        .map(|i| cast_with_options(i, &DataType::Int64, &strict))
        .transpose()?;

    let strings = s_arr.as_string::<i32>();
    let patterns = p_arr.as_string::<i32>();
    let indexes = i_arr.as_ref().map(|i| i.as_primitive::<Int64Type>());

    let mut evaluator = ExtractionEvaluator::new(cfg);
    let mut out = StringBuilder::with_capacity(rows, rows * 4);

    for row in 0..rows {
        if strings.is_null(row)
            || patterns.is_null(row)
            || indexes.is_some_and(|idx| idx.is_null(row))
        {
            out.append_null();
            continue;
        }

        let index = match indexes {
            Some(idx) => i32::try_from(idx.value(row)).map_err(|_| {
                DataFusionError::Execution(format!(
                    "regexp_extract: idx {} out of range",
                    idx.value(row)
                ))
            })?,
            None => DEFAULT_INDEX,
        };

        let extraction = RegexExtraction::new(patterns.value(row), index);
        let value = evaluator
            .apply_regex(&extraction, Some(strings.value(row)))
            .map_err(|e| DataFusionError::Execution(e.to_string()))?;
        out.append_option(value);
    }

    Ok(ColumnarValue::Array(Arc::new(out.finish())))
}
