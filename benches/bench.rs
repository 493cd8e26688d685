// Criterion benchmarks for Sanction Screen

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sanction_screen::core::extract_fields;
use sanction_screen::models::{FieldMatch, MatchRecord, MatchSummary, ProviderResult};

const VOCABULARY: [&str; 6] = ["Name", "DOB", "Citizenship", "Address", "Gender", "PlaceOfBirth"];

fn create_match(id: usize) -> MatchRecord {
    if id % 7 == 0 {
        return MatchRecord::default();
    }

    MatchRecord {
        match_summary: Some(MatchSummary {
            match_fields: (0..(id % 4) + 1)
                .map(|offset| FieldMatch {
                    field_name: VOCABULARY[(id + offset) % VOCABULARY.len()].to_string(),
                })
                .collect(),
        }),
    }
}

fn bench_extract_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_fields");

    for size in [10, 100, 1000, 10000].iter() {
        let matches: Vec<MatchRecord> = (0..*size).map(create_match).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &matches, |b, matches| {
            b.iter(|| extract_fields(black_box(matches)));
        });
    }

    group.finish();
}

fn bench_parse_provider_result(c: &mut Criterion) {
    let matches: Vec<serde_json::Value> = (0..500)
        .map(|id| {
            serde_json::json!({
                "score": 97,
                "matchSummary": {
                    "matchFields": [
                        { "fieldName": VOCABULARY[id % VOCABULARY.len()] },
                        { "fieldName": "Name" }
                    ]
                }
            })
        })
        .collect();
    let body = serde_json::json!({
        "results": [{ "matchCount": matches.len(), "matches": matches }]
    })
    .to_string();

    c.bench_function("parse_provider_result_500", |b| {
        b.iter(|| {
            let result: ProviderResult = serde_json::from_str(black_box(&body)).unwrap();
            result
        });
    });
}

criterion_group!(benches, bench_extract_fields, bench_parse_provider_result);
criterion_main!(benches);
