use bm_core::PackedBitmap;
use bm_morph::{dilate3x3, outline};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn synthetic_glyph_page(row_bytes: usize, height: usize) -> PackedBitmap {
    let mut page = PackedBitmap::new_fill(row_bytes, height, 0);
    let width = page.width_px();

    // Horizontal strokes.
    for y in (16..height.saturating_sub(16)).step_by(20) {
        for x in 32..width.saturating_sub(32) {
            page.set(x, y, true).expect("in bounds");
        }
    }

    // Vertical stems, two pixels wide.
    for x in (64..width.saturating_sub(64)).step_by(80) {
        for y in 64..height.saturating_sub(64) {
            page.set(x, y, true).expect("in bounds");
            page.set(x + 1, y, true).expect("in bounds");
        }
    }

    page
}

fn bench_outline(c: &mut Criterion) {
    let page = synthetic_glyph_page(160, 1024);
    let view = page.as_view();

    c.bench_function("bm_morph_outline_1280x1024", |b| {
        b.iter(|| {
            let out = outline(black_box(&view)).expect("valid dimensions");
            black_box(out.data().len());
        });
    });
}

fn bench_dilate3x3(c: &mut Criterion) {
    let page = synthetic_glyph_page(160, 1024);
    let view = page.as_view();

    c.bench_function("bm_morph_dilate3x3_1280x1024", |b| {
        b.iter(|| {
            let out = dilate3x3(black_box(&view)).expect("valid dimensions");
            black_box(out.data().len());
        });
    });
}

criterion_group!(benches, bench_outline, bench_dilate3x3);
criterion_main!(benches);
