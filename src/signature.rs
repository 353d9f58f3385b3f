//! Declared SQL surface of `REGEXP_EXTRACT`: name, return type and operand families.

use datafusion::arrow::datatypes::DataType;
use datafusion::logical_expr::{Signature, TypeSignature, Volatility};

static CHARACTER_TYPES: &[DataType] = &[DataType::Utf8, DataType::LargeUtf8, DataType::Utf8View];

static INTEGER_TYPES: &[DataType] = &[
    DataType::Int8,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::UInt8,
    DataType::UInt16,
    DataType::UInt32,
    DataType::UInt64,
];

/// Coarse SQL type family an operand position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    Character,
    Integer,
}

impl TypeFamily {
    /// Arrow types admitted by this family.
    pub fn members(self) -> &'static [DataType] {
        match self {
            TypeFamily::Character => CHARACTER_TYPES,
            TypeFamily::Integer => INTEGER_TYPES,
        }
    }

    pub fn contains(self, dt: &DataType) -> bool {
        self.members().contains(dt)
    }
}

pub fn family_of(dt: &DataType) -> Option<TypeFamily> {
    [TypeFamily::Character, TypeFamily::Integer]
        .into_iter()
        .find(|f| f.contains(dt))
}

#[derive(Debug)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub return_type: DataType,
    pub operand_families: &'static [TypeFamily],
    pub min_arity: usize,
    pub max_arity: usize,
}

/// `REGEXP_EXTRACT(str, pattern [, index])`; the third operand is optional.
pub static REGEXP_EXTRACT_SIGNATURE: FunctionSignature = FunctionSignature {
    name: "REGEXP_EXTRACT",
    return_type: DataType::Utf8,
    operand_families: &[
        TypeFamily::Character,
        TypeFamily::Character,
        TypeFamily::Integer,
    ],
    min_arity: 2,
    max_arity: 3,
};

impl FunctionSignature {
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn accepts_arity(&self, n: usize) -> bool {
        (self.min_arity..=self.max_arity).contains(&n)
    }

    pub fn accepts(&self, arg_types: &[DataType]) -> bool {
        self.accepts_arity(arg_types.len())
            && arg_types
                .iter()
                .zip(self.operand_families)
                .all(|(dt, family)| family.contains(dt))
    }

    /// Every admitted type combination for every admitted arity, as a
    /// DataFusion signature.
    pub fn to_datafusion_signature(&self) -> Signature {
        let mut combos: Vec<Vec<DataType>> = vec![vec![]];
        let mut variants = Vec::new();

        for (position, family) in self.operand_families.iter().enumerate() {
            combos = combos
                .into_iter()
                .flat_map(|prefix| {
                    family.members().iter().map(move |dt| {
                        let mut next = prefix.clone();
                        next.push(dt.clone());
                        next
                    })
                })
                .collect();

            if self.accepts_arity(position + 1) {
                variants.extend(combos.iter().cloned().map(TypeSignature::Exact));
            }
        }

        Signature::one_of(variants, Volatility::Immutable)
    }
}
