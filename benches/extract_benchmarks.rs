use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mermaid_docs_check::extract::{blocks, unterminated_fence};
use std::hint::black_box;

/// Generate markdown with `sections` paragraphs, every `every`th carrying a diagram
fn generate_markdown(sections: usize, every: usize) -> String {
    let mut content = String::from("# Architecture\n\n");

    for i in 0..sections {
        content.push_str(&format!(
            "## Section {}\n\nSome prose about component {} and how it talks to {}.\n\n",
            i,
            i,
            i + 1
        ));
        if i % every == 0 {
            content.push_str(&format!(
                "```mermaid\ngraph TD\n  N{}-->N{}\n  N{}-->N{}\n```\n\n",
                i,
                i + 1,
                i + 1,
                i + 2
            ));
        } else {
            content.push_str("```rust\nfn main() {}\n```\n\n");
        }
    }

    content
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_blocks");

    for &(sections, every) in &[(100, 1), (1_000, 10), (10_000, 50)] {
        let content = generate_markdown(sections, every);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("every_{}", every), sections),
            &content,
            |b, content| b.iter(|| blocks(black_box(content)).count()),
        );
    }

    group.finish();
}

fn bench_unterminated_scan(c: &mut Criterion) {
    let content = generate_markdown(5_000, 5);
    c.bench_function("unterminated_fence_5000", |b| {
        b.iter(|| unterminated_fence(black_box(&content)))
    });
}

criterion_group!(benches, bench_extraction, bench_unterminated_scan);
criterion_main!(benches);
