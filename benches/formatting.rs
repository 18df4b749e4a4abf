use cformat::{to_literal, ContentFormat, EscapeOptions, Scalar, SlashEscape};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fmt::Write;

fn benchmark_format_string_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_string_clean");

    let short = "short";
    let medium = "This is a medium length string with some content";
    let long = "This is a very long string that contains a lot of text and might require more processing time";

    for format in ContentFormat::ALL {
        group.bench_with_input(BenchmarkId::new("short", format), &short, |b, s| {
            b.iter(|| format.format_string(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("medium", format), &medium, |b, s| {
            b.iter(|| format.format_string(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("long", format), &long, |b, s| {
            b.iter(|| format.format_string(black_box(s)))
        });
    }
    group.finish();
}

fn benchmark_format_string_escaped(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_string_escaped");

    for size in [10, 100, 1000].iter() {
        let raw: String = (0..*size)
            .map(|i| match i % 7 {
                0 => '"',
                1 => '\\',
                2 => '\n',
                3 => '/',
                4 => '\u{2028}',
                5 => '\u{1}',
                _ => 'x',
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| ContentFormat::JavaScriptOrJson.format_string(black_box(raw)))
        });
    }
    group.finish();
}

fn benchmark_script_guards(c: &mut Criterion) {
    let raw = "<!-- comment --> <![CDATA[data]]> </script> ".repeat(20);
    let options = EscapeOptions::new()
        .with_slash(SlashEscape::AfterLessThan)
        .with_html_comment_guard(true);

    c.bench_function("format_string_with_guards", |b| {
        b.iter(|| ContentFormat::JavaScriptOrJson.format_string_with(black_box(&raw), &options))
    });
}

fn benchmark_string_literal_streaming(c: &mut Criterion) {
    let raw = "Quote \" backslash \\ and a newline\n".repeat(10);

    c.bench_function("string_literal_into_buffer", |b| {
        let mut out = String::with_capacity(1024);
        b.iter(|| {
            out.clear();
            let _ = write!(
                out,
                "var s = {};",
                ContentFormat::JavaScript.string_literal(black_box(&raw))
            );
        })
    });
}

fn benchmark_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");
    let format = ContentFormat::default();

    let integers: Vec<Scalar> = (0..100).map(Scalar::from).collect();
    let floats: Vec<Scalar> = (0..100).map(|i| Scalar::from(i as f64 * 1.5e-4)).collect();
    let bools: Vec<Scalar> = (0..100).map(|i| Scalar::from(i % 2 == 0)).collect();

    group.bench_function("integers", |b| {
        b.iter(|| {
            integers
                .iter()
                .map(|v| format.format_scalar(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("floats", |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|v| format.format_scalar(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("booleans", |b| {
        b.iter(|| {
            bools
                .iter()
                .map(|v| format.format_scalar(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    let raw = "user \"alice\" <alice@example.com>\n\tlast seen 2024-01-01";

    group.bench_function("cformat_json", |b| {
        b.iter(|| to_literal(black_box(raw), ContentFormat::Json))
    });

    group.bench_function("cformat_combined", |b| {
        b.iter(|| to_literal(black_box(raw), ContentFormat::JavaScriptOrJson))
    });

    group.bench_function("serde_json", |b| {
        b.iter(|| serde_json::to_string(black_box(raw)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_format_string_clean,
    benchmark_format_string_escaped,
    benchmark_script_guards,
    benchmark_string_literal_streaming,
    benchmark_scalars,
    benchmark_comparison_with_json
);
criterion_main!(benches);
