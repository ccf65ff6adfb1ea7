// File: crates/atlas-core/benches/render_bench.rs
// Summary: Criterion benches for drawing plots to PNG and for pointer hit-testing.

use atlas_core::{DotPlot, HoverLayer, LinePlot, Plot, Result, Table, Viewport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_table(n: usize) -> Table {
    let mut csv = String::with_capacity(n * 24);
    csv.push_str("x,y,name\n");
    for i in 0..n {
        let x = i as f64;
        let y = (x * 0.01).sin() * 10.0 + x * 0.0001;
        csv.push_str(&format!("{x},{y:.4},p{i}\n"));
    }
    Table::parse_str(&csv).expect("bench csv")
}

fn draw_line(table: &Table) -> Result<(Viewport, HoverLayer)> {
    let mut vp = Viewport::new(800, 500)?;
    let layer = LinePlot::new(table.clone(), "x", "y").draw(&mut vp)?;
    Ok((vp, layer))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        let table = build_table(n);
        group.bench_function(format!("line_{n}"), |b| {
            b.iter(|| -> Result<()> {
                let (mut vp, _) = draw_line(&table)?;
                black_box(vp.render_to_png_bytes()?);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let table = build_table(10_000);
    let mut vp = Viewport::new(800, 500).expect("viewport");
    let layer = DotPlot::new(table, "x", "y").draw(&mut vp).expect("draw");
    c.bench_function("hover_10k_dots", |b| {
        b.iter(|| {
            for px in (0..800).step_by(40) {
                black_box(layer.hover(px as f64, 250.0));
            }
        });
    });
}

criterion_group!(benches, bench_render, bench_hover);
criterion_main!(benches);
