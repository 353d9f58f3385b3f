use criterion::{Criterion, criterion_group, criterion_main};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::prelude::{col, lit};
use std::hint::black_box;

use regexp_extract_pushdown::{
    BasicOperandTranslator, ExtractionEvaluator, ExtractionTransform, PlannerContext,
    RegexExtraction, RegexpExtractConfig, RegexpExtractConversion, SimpleExtraction,
};

fn schema() -> Schema {
    Schema::new(vec![
        Field::new("s", DataType::Utf8, true),
        Field::new("p", DataType::Utf8, true),
    ])
}

fn bench_translate_literal_call(c: &mut Criterion) {
    let ctx = PlannerContext::default();
    let schema = schema();
    let args = vec![col("s"), lit(r"(\d+)-(\d+)"), lit(1)];

    c.bench_function("translate / literal pattern / literal idx", |b| {
        b.iter(|| {
            let out = RegexpExtractConversion.translate(
                &ctx,
                &schema,
                black_box(&args),
                &BasicOperandTranslator,
            );
            black_box(out);
        });
    });
}

fn bench_translate_dynamic_call(c: &mut Criterion) {
    let ctx = PlannerContext::default();
    let schema = schema();
    let args = vec![col("s"), col("p")];

    c.bench_function("translate / column pattern / default idx", |b| {
        b.iter(|| {
            let out = RegexpExtractConversion.translate(
                &ctx,
                &schema,
                black_box(&args),
                &BasicOperandTranslator,
            );
            black_box(out);
        });
    });
}

fn bench_evaluate_chain(c: &mut Criterion) {
    let chain = SimpleExtraction::new("s").cascade(ExtractionTransform::Regex(
        RegexExtraction::new(r"(\d+)-(\d+)", 1),
    ));
    let mut ev = ExtractionEvaluator::new(&RegexpExtractConfig::default());

    // same pattern every row (exercises cache hit path)
    c.bench_function("evaluate / one-step chain", |b| {
        b.iter(|| {
            let out = ev.evaluate(black_box(&chain), Some("100-200")).unwrap();
            black_box(out);
        });
    });
}

criterion_group!(
    benches,
    bench_translate_literal_call,
    bench_translate_dynamic_call,
    bench_evaluate_chain
);
criterion_main!(benches);
