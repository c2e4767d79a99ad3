use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fruity_lookup::{Fruit, Nutrition, OutputFormat, decode, format_fruit, is_reserved_keyword};

const APPLE_JSON: &str = r#"{"name":"Apple","id":6,"family":"Rosaceae","order":"Rosales","genus":"Malus","nutritions":{"calories":52,"fat":0.4,"sugar":10.3,"carbohydrates":11.4,"protein":0.3}}"#;

fn apple() -> Fruit {
    Fruit {
        name: "Apple".to_string(),
        id: 6,
        family: "Rosaceae".to_string(),
        order: "Rosales".to_string(),
        genus: "Malus".to_string(),
        nutrition: Nutrition {
            calories: Some(52),
            fat: 0.4,
            sugar: 10.3,
            carbohydrates: 11.4,
            protein: 0.3,
        },
    }
}

fn bench_is_reserved_keyword(c: &mut Criterion) {
    let names = ["apple", "Nutritions", "passion fruit", "SUGAR", "family"];

    c.bench_function("is_reserved_keyword", |b| {
        b.iter(|| {
            for name in &names {
                let _ = is_reserved_keyword(black_box(name));
            }
        })
    });
}

fn bench_format_fruit(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_fruit");
    let fruit = apple();

    for format in [OutputFormat::User, OutputFormat::Json] {
        group.bench_with_input(BenchmarkId::from_parameter(format), &format, |b, format| {
            b.iter(|| format_fruit(black_box(&fruit), *format))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let catalog = format!("[{}]", vec![APPLE_JSON; 50].join(","));

    c.bench_function("decode single", |b| {
        b.iter(|| decode::fruit(black_box(APPLE_JSON.as_bytes())))
    });

    c.bench_function("decode catalog", |b| {
        b.iter(|| decode::fruits(black_box(catalog.as_bytes())))
    });
}

criterion_group!(
    benches,
    bench_is_reserved_keyword,
    bench_format_fruit,
    bench_decode
);
criterion_main!(benches);
