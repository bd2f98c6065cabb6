//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package brace-lex`

use brace_lex::tokenize;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn token_count(source: &str) -> usize {
    tokenize(source).map(|tokens| tokens.len()).unwrap_or(0)
}

const PROGRAM: &str = r#"
struct Stack<Element> {
    var items: [Element] = []

    /* Pushes onto the top. /* nested */ */
    mutating func push(_ item: Element) {
        items.append(item)
    }

    func peek() -> Element? {
        return items.last // may be nil
    }
}

let cache: Dictionary<String, Array<Int>> = [:]
let ok = a < b && c > d
print("count: \(cache.count), ok: \(ok)")
"#;

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("program", |b| b.iter(|| token_count(black_box(PROGRAM))));

    let large = PROGRAM.repeat(200);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("program_x200", |b| b.iter(|| token_count(black_box(&large))));

    group.finish();
}

fn bench_lexer_generics(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_generics");

    let nested = format!("{}Int{}()", "Array<".repeat(64), ">".repeat(64));
    group.bench_function("nested_64", |b| b.iter(|| token_count(black_box(&nested))));

    let comparisons = "a < b && c > d\n".repeat(500);
    group.bench_function("comparisons", |b| {
        b.iter(|| token_count(black_box(&comparisons)))
    });

    let reverted = format!("a{}b", "<b".repeat(500) + &">".repeat(500));
    group.bench_function("reverted_chain", |b| {
        b.iter(|| token_count(black_box(&reverted)))
    });

    group.finish();
}

fn bench_lexer_bodies(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_bodies");

    let string = format!("\"{}\"", "lorem ipsum \\(x) ".repeat(200));
    group.bench_function("interpolated_string", |b| {
        b.iter(|| token_count(black_box(&string)))
    });

    let comment = format!("/*{}*/", " text /* inner */\n".repeat(200));
    group.bench_function("block_comment", |b| {
        b.iter(|| token_count(black_box(&comment)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_program,
    bench_lexer_generics,
    bench_lexer_bodies
);
criterion_main!(benches);
