use chart_builder::core::DataRecord;
use chart_builder::{
    AxisOptions, BaseChartOptions, CartesianChartOptions, DropShadowOptions, LegendOptions,
    PolarChartOptions, SeriesOptions, create_bar_chart, create_cartesian_chart, create_pie_chart,
};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn sample_data(rows: usize) -> Vec<DataRecord> {
    (0..rows)
        .map(|i| {
            let mut row = DataRecord::new();
            row.insert("category".to_owned(), json!(format!("c{i}")));
            row.insert("a".to_owned(), json!(i as f64));
            row.insert("b".to_owned(), json!((i * 2) as f64));
            row
        })
        .collect()
}

fn bench_cartesian_chart_64_series(c: &mut Criterion) {
    let data = sample_data(32);
    let series: Vec<SeriesOptions> = (0..64)
        .map(|i| {
            let entry = if i % 2 == 0 {
                SeriesOptions::line("category", "a")
            } else {
                SeriesOptions::bar("category", ["a", "b"])
                    .with_shadow(DropShadowOptions::default().with_blur(2.0))
            };
            entry.with_title(format!("series {i}")).with_data(data.clone())
        })
        .collect();
    let options = CartesianChartOptions::new(AxisOptions::category(), AxisOptions::number())
        .with_chart(
            BaseChartOptions::default()
                .with_size(1920.0, 1080.0)
                .with_legend(LegendOptions::default().with_marker_size(12.0))
                .with_series(series),
        );

    c.bench_function("cartesian_chart_64_series", |b| {
        b.iter(|| create_cartesian_chart(black_box(&options)).expect("cartesian chart"))
    });

    c.bench_function("bar_chart_64_series_forced", |b| {
        b.iter(|| create_bar_chart(black_box(&options)).expect("bar chart"))
    });
}

fn bench_pie_chart(c: &mut Criterion) {
    let options = PolarChartOptions::new(BaseChartOptions::default().with_series(vec![
        SeriesOptions::pie("a").with_data(sample_data(256)),
    ]));

    c.bench_function("pie_chart_256_rows", |b| {
        b.iter(|| create_pie_chart(black_box(&options)))
    });
}

criterion_group!(benches, bench_cartesian_chart_64_series, bench_pie_chart);
criterion_main!(benches);
