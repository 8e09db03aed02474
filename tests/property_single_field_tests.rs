use chart_builder::api::{create_axis, create_drop_shadow, create_pie_series};
use chart_builder::core::{
    Axis, AxisKind, ChartBase, Color, ContainerHandle, DataRecord, GridStyle, Legend,
    LegendPosition, Padding, PieSeries, Series,
};
use chart_builder::{
    AxisOptions, BaseChartOptions, DropShadowOptions, LegendOptions, PaddingOptions,
    PolarChartOptions, SeriesOptions, create_polar_chart,
};
use proptest::prelude::*;
use serde_json::json;
use smallvec::smallvec;

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

fn axis_kind() -> impl Strategy<Value = AxisKind> {
    prop_oneof![Just(AxisKind::Category), Just(AxisKind::Number)]
}

proptest! {
    #[test]
    fn single_pie_field_changes_only_that_field(
        pick in 0usize..19,
        number in -500.0f64..500.0,
        flag in any::<bool>(),
        name in "[a-z]{1,8}",
        paint in color(),
    ) {
        let mut options = SeriesOptions::default();
        let mut expected = PieSeries::default();
        match pick {
            0 => {
                options.angle_field = Some(name.clone());
                expected.angle_field = name;
            }
            1 => {
                options.radius_field = Some(name.clone());
                expected.radius_field = Some(name);
            }
            2 => {
                options.label_field = Some(name.clone());
                expected.label_field = Some(name);
            }
            3 => {
                options.label = Some(flag);
                expected.label = flag;
            }
            4 => {
                options.label_font = Some(name.clone());
                expected.label_font = name;
            }
            5 => {
                options.label_color = Some(paint);
                expected.label_color = paint;
            }
            6 => {
                options.label_min_angle = Some(number);
                expected.label_min_angle = number;
            }
            7 => {
                options.callout_colors = Some(vec![paint]);
                expected.callout_colors = vec![paint];
            }
            8 => {
                options.callout_width = Some(number);
                expected.callout_width = number;
            }
            9 => {
                options.callout_length = Some(number);
                expected.callout_length = number;
            }
            10 => {
                options.callout_padding = Some(number);
                expected.callout_padding = number;
            }
            11 => {
                options.fills = Some(vec![paint]);
                expected.fills = vec![paint];
            }
            12 => {
                options.strokes = Some(vec![paint]);
                expected.strokes = vec![paint];
            }
            13 => {
                options.rotation = Some(number);
                expected.rotation = number;
            }
            14 => {
                options.outer_radius_offset = Some(number);
                expected.outer_radius_offset = number;
            }
            15 => {
                options.inner_radius_offset = Some(number);
                expected.inner_radius_offset = number;
            }
            16 => {
                options.line_width = Some(number);
                expected.line_width = number;
            }
            17 => {
                let shadow = DropShadowOptions::default().with_blur(number);
                expected.shadow = Some(create_drop_shadow(Some(&shadow)));
                options.shadow = Some(shadow);
            }
            _ => {
                options.title = Some(name.clone());
                expected.base.title = Some(name);
            }
        }
        prop_assert_eq!(create_pie_series(&options), expected);
    }

    #[test]
    fn single_axis_style_field_changes_only_that_field(
        kind in axis_kind(),
        pick in 0usize..12,
        number in -100.0f64..100.0,
        flag in any::<bool>(),
        font in "[0-9]{1,2}px [A-Z][a-z]{2,8}",
        paint in color(),
    ) {
        let mut options = AxisOptions::new(kind.name());
        let mut expected = Axis::new(kind);
        let style = expected.style_mut();
        match pick {
            0 => {
                options.line_width = Some(number);
                style.line_width = number;
            }
            1 => {
                options.line_color = Some(paint);
                style.line_color = paint;
            }
            2 => {
                options.tick_width = Some(number);
                style.tick_width = number;
            }
            3 => {
                options.tick_size = Some(number);
                style.tick_size = number;
            }
            4 => {
                options.tick_padding = Some(number);
                style.tick_padding = number;
            }
            5 => {
                options.tick_color = Some(paint);
                style.tick_color = paint;
            }
            6 => {
                options.label_font = Some(font.clone());
                style.label_font = font;
            }
            7 => {
                options.label_color = Some(paint);
                style.label_color = paint;
            }
            8 => {
                options.label_rotation = Some(number);
                style.label_rotation = number;
            }
            9 => {
                options.mirror_labels = Some(flag);
                style.mirror_labels = flag;
            }
            10 => {
                options.parallel_labels = Some(flag);
                style.parallel_labels = flag;
            }
            _ => {
                let grid = vec![GridStyle { stroke: paint, line_dash: smallvec![number.abs()] }];
                options.grid_style = Some(grid.clone());
                style.grid_style = grid;
            }
        }
        prop_assert_eq!(create_axis(&options).expect("known axis kind"), expected);
    }

    #[test]
    fn single_axis_variant_field_changes_only_that_field(
        pick in 0usize..4,
        low in -100.0f64..0.0,
        high in 0.0f64..100.0,
        flag in any::<bool>(),
    ) {
        let (options, expected) = match pick {
            0 => {
                let mut axis = Axis::new(AxisKind::Category);
                if let Axis::Category(category) = &mut axis {
                    category.padding_inner = high;
                }
                let options = AxisOptions { padding_inner: Some(high), ..AxisOptions::category() };
                (options, axis)
            }
            1 => {
                let mut axis = Axis::new(AxisKind::Category);
                if let Axis::Category(category) = &mut axis {
                    category.padding_outer = high;
                }
                let options = AxisOptions { padding_outer: Some(high), ..AxisOptions::category() };
                (options, axis)
            }
            2 => {
                let mut axis = Axis::new(AxisKind::Number);
                if let Axis::Number(number) = &mut axis {
                    number.domain = (low, high);
                }
                (AxisOptions::number().with_domain(low, high), axis)
            }
            _ => {
                let mut axis = Axis::new(AxisKind::Number);
                if let Axis::Number(number) = &mut axis {
                    number.nice = flag;
                }
                (AxisOptions::number().with_nice(flag), axis)
            }
        };
        prop_assert_eq!(create_axis(&options).expect("known axis kind"), expected);
    }

    #[test]
    fn single_chart_field_changes_only_that_field(
        pick in 0usize..10,
        number in 0.0f64..2000.0,
        name in "[a-z]{1,8}",
        position in 0usize..4,
    ) {
        let mut options = BaseChartOptions::default();
        let mut expected = ChartBase::default();
        match pick {
            0 => {
                options.parent = Some(ContainerHandle::new(name.clone()));
                expected.parent = Some(ContainerHandle::new(name));
            }
            1 => {
                options.width = Some(number);
                expected.width = number;
            }
            2 => {
                options.height = Some(number);
                expected.height = number;
            }
            3 => {
                options.series = Some(vec![SeriesOptions::pie(name.clone())]);
                expected.series = vec![Series::Pie(PieSeries {
                    angle_field: name,
                    ..PieSeries::default()
                })];
            }
            4 => {
                options.padding = Some(PaddingOptions::uniform(number));
                expected.padding = Padding::uniform(number);
            }
            5 => {
                let position = [
                    LegendPosition::Top,
                    LegendPosition::Right,
                    LegendPosition::Bottom,
                    LegendPosition::Left,
                ][position];
                options.legend_position = Some(position);
                expected.legend_position = position;
            }
            6 => {
                options.legend_padding = Some(number);
                expected.legend_padding = number;
            }
            7 => {
                options.legend = Some(LegendOptions::default().with_marker_size(number));
                expected.legend = Legend { marker_size: number, ..Legend::default() };
            }
            8 => {
                let mut row = DataRecord::new();
                row.insert(name, json!(number));
                options.data = Some(vec![row.clone()]);
                expected.data = vec![row];
            }
            _ => {
                options.tooltip_class = Some(name.clone());
                expected.tooltip_class = Some(name);
            }
        }
        let chart = create_polar_chart(&PolarChartOptions::new(options));
        prop_assert_eq!(chart.base, expected);
    }
}
