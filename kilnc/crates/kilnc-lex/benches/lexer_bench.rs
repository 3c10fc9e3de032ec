//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package kilnc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kilnc_lex::{tokenize, Lexer};

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source.as_bytes()).count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "fun main() { let y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        import io as out;

        struct Point {
            x: string32,
            y: strA,
        }

        process Counter {
            var count = 0;

            message inc(step: str8) -> Counter {
                for i in 0...step {
                    count = count + i ** 2;
                }
                return self;
            }
        }

        fun main() {
            let c = spawn Counter;
            c |> inc(10) |> inc(2.5);
            // done
            match c.count { 0 => false, _ => true }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("complex_source_collect", |b| {
        b.iter(|| tokenize(black_box(source.as_bytes())).map(|t| t.len()))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("let s = \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"let s = "a \"quoted\" value with \\ escapes and \n newlines";"#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 3.14159;")))
    });

    group.bench_function("range", |b| {
        b.iter(|| lexer_token_count(black_box("for i in 0..100 {}")))
    });

    group.finish();
}

fn bench_lexer_malformed(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_malformed");

    let source = "héllo @ wörld # `tick` ✓ ".repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_soft_failures", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_malformed
);
criterion_main!(benches);
