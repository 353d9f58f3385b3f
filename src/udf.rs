//! UDF construction: exposes the declared signature to the DataFusion planner

use crate::config::RegexpExtractConfig;
use crate::signature::REGEXP_EXTRACT_SIGNATURE;
use crate::translate::FUNCTION_NAME;
use datafusion::arrow::datatypes::DataType;
use datafusion::common::Result;
use datafusion::logical_expr::{
    ColumnarValue, ScalarFunctionArgs, ScalarUDF, ScalarUDFImpl, Signature,
};

use std::any::Any;

/// Public factory: the logical UDF handle used from SQL and the Expr/DataFrame API
pub fn regexp_extract_udf() -> ScalarUDF {
    regexp_extract_udf_with(RegexpExtractConfig::default())
}

pub fn regexp_extract_udf_with(config: RegexpExtractConfig) -> ScalarUDF {
    ScalarUDF::from(RegexpExtractUdf::new(config))
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct RegexpExtractUdf {
    signature: Signature,
    config: RegexpExtractConfig,
}

impl RegexpExtractUdf {
    fn new(config: RegexpExtractConfig) -> Self {
        Self {
            signature: REGEXP_EXTRACT_SIGNATURE.to_datafusion_signature(),
            config,
        }
    }
}

impl ScalarUDFImpl for RegexpExtractUdf {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &str {
        FUNCTION_NAME
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn return_type(&self, _arg_types: &[DataType]) -> Result<DataType> {
        Ok(REGEXP_EXTRACT_SIGNATURE.return_type.clone())
    }

    fn invoke_with_args(&self, args: ScalarFunctionArgs) -> Result<ColumnarValue> {
        crate::eval::evaluate_regexp_extract_with(args, &self.config)
    }
}
