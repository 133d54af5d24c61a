use armaconfig::{from_str, to_string, to_string_pretty, to_value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Builds a config with `count` vehicle classes, each inheriting from the
/// previous one.
fn vehicle_config(count: usize) -> String {
    let mut text = String::from("class CfgVehicles {\n    class Base { maxSpeed = 100; };\n");
    let mut parent = String::from("Base");
    for i in 0..count {
        let name = format!("Vehicle_{}", i);
        text.push_str(&format!(
            "    class {} : {} {{\n        displayName = \"Vehicle {}\";\n        armor = {}.5;\n        wheels[] = {{{{0, 1.5}}, {{0, -1.5}}, {{1, 0}}}};\n    }};\n",
            name, parent, i, i
        ));
        parent = name;
    }
    text.push_str("};\n");
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000].iter() {
        let text = vehicle_config(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let doc = from_str(&vehicle_config(100)).unwrap();

    group.bench_function("compact", |b| b.iter(|| to_string(black_box(&doc))));
    group.bench_function("pretty", |b| b.iter(|| to_string_pretty(black_box(&doc))));
    group.bench_function("structural", |b| b.iter(|| to_value(black_box(&doc))));

    group.finish();
}

fn benchmark_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let plain = format!("s = \"{}\";", "a".repeat(1000));
    let quoted = format!("s = \"{}\";", "a\"\"b".repeat(250));
    let comments = format!("{}x = 1;", "// comment line\n/* block\ncomment */\n".repeat(100));

    group.bench_function("plain_string", |b| b.iter(|| from_str(black_box(&plain))));
    group.bench_function("doubled_quotes", |b| b.iter(|| from_str(black_box(&quoted))));
    group.bench_function("comments", |b| b.iter(|| from_str(black_box(&comments))));

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_encode, benchmark_strings);
criterion_main!(benches);
