use criterion::{black_box, criterion_group, criterion_main, Criterion};
use promo_pdf::{Composer, ComposerConfig, DocumentKind};

const LINK: &str = "https://giclub.online/register?ref=0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

fn bench_build(c: &mut Criterion) {
    let plain = Composer::new();
    let compressed = Composer::with_config(ComposerConfig::default().with_compress(true));

    c.bench_function("build_brochure", |b| {
        b.iter(|| plain.build(black_box(DocumentKind::Brochure), black_box(LINK)).unwrap())
    });

    c.bench_function("build_flyer", |b| {
        b.iter(|| plain.build(black_box(DocumentKind::Flyer), black_box(LINK)).unwrap())
    });

    c.bench_function("build_brochure_compressed", |b| {
        b.iter(|| compressed.build(black_box(DocumentKind::Brochure), black_box(LINK)).unwrap())
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
