// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use std::time::Duration;
use understory_reorder::{
    GeometryProvider, GridLayout, LayoutStrategy, ListLayout, MarginEdge, PointerDown,
    PointerListeners, ReorderEngine, StyleMutator,
};

const CONTAINER: usize = usize::MAX;

/// Fixed geometry with no-op styling.
struct BenchHost {
    cells: Vec<Rect>,
    container: Rect,
}

impl BenchHost {
    fn grid(count: usize, columns: usize, cell: f64, gap: f64) -> Self {
        let step = cell + gap;
        let cells = (0..count)
            .map(|i| {
                let x = (i % columns) as f64 * step;
                let y = (i / columns) as f64 * step;
                Rect::new(x, y, x + cell, y + cell)
            })
            .collect::<Vec<_>>();
        let rows = count.div_ceil(columns);
        let container = Rect::new(
            0.0,
            0.0,
            columns as f64 * step - gap,
            rows as f64 * step - gap,
        );
        Self { cells, container }
    }
}

impl GeometryProvider<usize> for BenchHost {
    fn bounds(&self, node: &usize) -> Rect {
        self.cells.get(*node).copied().unwrap_or(self.container)
    }

    fn children(&self, _container: &usize, out: &mut Vec<usize>) {
        out.extend(0..self.cells.len());
    }
}

impl StyleMutator<usize> for BenchHost {
    fn pin(&mut self, _node: &usize, _bounds: Rect) {}

    fn set_margin(&mut self, _node: &usize, _edge: MarginEdge, _amount: f64) {}

    fn set_translation(&mut self, _node: &usize, _offset: Vec2) {}

    fn clear(&mut self, _node: &usize) {}

    fn set_selection_suppressed(&mut self, _suppressed: bool) {}
}

impl PointerListeners for BenchHost {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

/// One full session: pick the first item and sweep it across the container.
fn sweep<L: LayoutStrategy>(engine: &mut ReorderEngine<usize, usize, L>, host: &mut BenchHost) {
    let first = host.cells[0].center();
    let bottom = host.container.y1;
    engine.pick(host, PointerDown::primary(first), 0, CONTAINER, 0, 0);
    for step in 0..64 {
        let y = first.y + bottom * f64::from(step) / 64.0;
        black_box(engine.pointer_move(host, Point::new(first.x + f64::from(step), y)));
    }
    black_box(engine.pointer_up(host));
}

fn bench_list_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/list_sweep");
    for len in [16_usize, 128, 1_024] {
        group.throughput(Throughput::Elements(64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut host = BenchHost::grid(len, 1, 40.0, 8.0);
            let mut engine = ReorderEngine::with_layout(ListLayout);
            b.iter(|| sweep(&mut engine, &mut host));
        });
    }
    group.finish();
}

fn bench_grid_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/grid_sweep");
    for len in [16_usize, 128, 1_024] {
        group.throughput(Throughput::Elements(64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut host = BenchHost::grid(len, 8, 100.0, 12.0);
            let mut engine = ReorderEngine::with_layout(GridLayout);
            b.iter(|| sweep(&mut engine, &mut host));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = bench_list_sweep, bench_grid_sweep
}
criterion_main!(benches);
