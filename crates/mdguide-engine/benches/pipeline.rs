use criterion::{Criterion, criterion_group, criterion_main};
use mdguide_engine::{PipelineOptions, Source, parse_str, process_sources, render_html};

fn generate_guide(sections: usize) -> String {
    let base = concat!(
        "## Section\n\n",
        "Paragraph with [a link](next.md) and `code`.\n\n",
        "- Bullet point\n- Another item\n\n",
        "| Property | Value |\n|---|---|\n| float | left |\n\n",
        "```css\n.box {\n  float: left;\n}\n```\n\n",
    );
    format!("# Guide\n\n{}", base.repeat(sections))
}

fn bench_parse_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_document");
    group.sample_size(20);

    let content = generate_guide(200);
    group.bench_function("parse", |b| {
        b.iter(|| parse_str(std::hint::black_box(&content)));
    });

    let blocks = parse_str(&content).expect("generated guide parses");
    group.bench_function("render", |b| {
        b.iter(|| render_html(std::hint::black_box(&blocks)));
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let sources: Vec<Source> = (0..32)
        .map(|i| Source::new(format!("guide-{i}.md"), generate_guide(50)))
        .collect();

    for parallel in [false, true] {
        let name = if parallel { "parallel" } else { "sequential" };
        let options = PipelineOptions {
            parallel,
            ..PipelineOptions::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| process_sources(sources.clone(), &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_and_render, bench_pipeline);
criterion_main!(benches);
