use criterion::{black_box, criterion_group, criterion_main, Criterion};

use envirochlor_core::analysis::TrendChart;
use envirochlor_core::{ChartBuilder, DosageInputs, SensorChannel, SensorHistory};

fn bench_chart(c: &mut Criterion) {
    let builder = ChartBuilder::default();
    let inputs = DosageInputs {
        dissolved_oxygen: 6.2,
        temperature: 18.0,
        turbidity_inlet: 3.5,
        turbidity_outlet: 6.0,
    };

    let mut history = SensorHistory::new(SensorChannel::Chlorine);
    history.extend((0..1_000).map(|i| (i % 14) as f64));

    c.bench_function("build_chart", |b| {
        b.iter(|| {
            let trend = TrendChart::from_history(&history, 5).unwrap();
            builder.build(black_box(&inputs), trend)
        })
    });

    c.bench_function("predict_next", |b| {
        b.iter(|| history.predict_next(black_box(5)))
    });
}

criterion_group!(benches, bench_chart);
criterion_main!(benches);
