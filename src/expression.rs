//! Native expression representation that translated operands and calls lower to.

use crate::extraction::{ExtractionTransform, SimpleExtraction};
use datafusion::common::ScalarValue;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum NativeExpression {
    /// Column reference, possibly annotated with a transform chain.
    Extraction(SimpleExtraction),
    Literal(ScalarValue),
    /// Named function evaluated per row.
    Call {
        function: String,
        args: Vec<NativeExpression>,
    },
}

impl NativeExpression {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Extraction(SimpleExtraction::new(name))
    }

    pub fn literal(value: ScalarValue) -> Self {
        Self::Literal(value)
    }

    pub fn function_call(function: impl Into<String>, args: Vec<NativeExpression>) -> Self {
        Self::Call {
            function: function.into(),
            args,
        }
    }

    pub fn as_simple_extraction(&self) -> Option<&SimpleExtraction> {
        match self {
            Self::Extraction(extraction) => Some(extraction),
            _ => None,
        }
    }

    /// Appends `transform` to this reference's chain. `None` unless `self`
    /// is a simple extraction.
    pub fn chain(&self, transform: ExtractionTransform) -> Option<Self> {
        self.as_simple_extraction()
            .map(|extraction| Self::Extraction(extraction.cascade(transform)))
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str, quote: char) -> fmt::Result {
    use fmt::Write;

    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

fn write_extraction(
    f: &mut fmt::Formatter<'_>,
    column: &str,
    transforms: &[ExtractionTransform],
) -> fmt::Result {
    let Some((last, inner)) = transforms.split_last() else {
        return write_escaped(f, column, '"');
    };
    match last {
        ExtractionTransform::Regex(rx) => {
            f.write_str("regexp_extract(")?;
            write_extraction(f, column, inner)?;
            f.write_str(",")?;
            write_escaped(f, &rx.expr, '\'')?;
            write!(f, ",{})", rx.index)
        }
    }
}

impl fmt::Display for NativeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extraction(extraction) => {
                write_extraction(f, extraction.column(), extraction.transforms())
            }
            Self::Literal(value) => match value {
                ScalarValue::Utf8(Some(s))
                | ScalarValue::LargeUtf8(Some(s))
                | ScalarValue::Utf8View(Some(s)) => write_escaped(f, s, '\''),
                v if v.is_null() => f.write_str("null"),
                v => write!(f, "{v}"),
            },
            Self::Call { function, args } => {
                write!(f, "{function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
