use std::sync::Arc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use termstyle::{Border, Color, ColorProfile, Position, Renderer, RgbColor, Style, StyleSheet};

const SAMPLE_LINE: &str = "The quick brown fox jumps over the lazy dog.";
const SAMPLE_PARAGRAPH: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt.";

fn bench_style_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("termstyle/style_creation");

    group.bench_function("Style::new", |b| {
        b.iter(|| black_box(Style::new()));
    });

    group.bench_function("Style::new_with_all_props", |b| {
        b.iter(|| {
            black_box(
                Style::new()
                    .foreground_color(RgbColor::new(255, 0, 0))
                    .background_color(RgbColor::new(0, 0, 255))
                    .bold()
                    .italic()
                    .underline()
                    .padding([1, 2, 1, 2])
                    .margin([1])
                    .border(Border::rounded()),
            )
        });
    });

    group.bench_function("Style::inherit", |b| {
        let parent = Style::new().bold().foreground("#ff8040").background("236");
        b.iter(|| black_box(Style::new().italic().inherit(&parent)));
    });

    group.finish();
}

fn bench_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("termstyle/colors");

    group.bench_function("Color::hex_parse", |b| {
        b.iter(|| {
            let color = Color::from("#FF8040");
            black_box(color.as_rgb())
        });
    });

    group.bench_function("Color::ansi_parse", |b| {
        b.iter(|| {
            let color = Color::from("196");
            black_box(color.as_ansi())
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("termstyle/render");
    let renderer = Arc::new(Renderer::with_profile(ColorProfile::TrueColor));

    let plain = Style::new();
    let styled = Style::new()
        .renderer(Arc::clone(&renderer))
        .bold()
        .foreground("#ff00ff")
        .background("#1a1a1a");
    let boxed = styled
        .clone()
        .padding([1, 2])
        .margin([1])
        .border(Border::rounded())
        .border_foreground(&["63"])
        .width(40)
        .align(Position::Center);
    let underlined = Style::new()
        .renderer(renderer)
        .underline()
        .underline_spaces(false);

    group.throughput(Throughput::Bytes(SAMPLE_PARAGRAPH.len() as u64));

    group.bench_function("plain", |b| {
        b.iter(|| black_box(plain.render(black_box(SAMPLE_LINE))));
    });

    group.bench_function("styled", |b| {
        b.iter(|| black_box(styled.render(black_box(SAMPLE_LINE))));
    });

    group.bench_function("boxed_wrapped", |b| {
        b.iter(|| black_box(boxed.render(black_box(SAMPLE_PARAGRAPH))));
    });

    group.bench_function("space_styler", |b| {
        b.iter(|| black_box(underlined.render(black_box(SAMPLE_PARAGRAPH))));
    });

    group.finish();
}

fn bench_stylesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("termstyle/stylesheet");
    let source = r##"
        [base]
        foreground = "#fafafa"
        bold = true

        [panel]
        inherit = "base"
        border = "rounded"
        padding = [1, 2]
    "##;

    group.bench_function("from_toml", |b| {
        b.iter(|| black_box(StyleSheet::from_toml(black_box(source))));
    });

    if let Ok(sheet) = StyleSheet::from_toml(source) {
        group.bench_function("resolve_inherited", |b| {
            b.iter(|| black_box(sheet.style("panel")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_style_creation,
    bench_colors,
    bench_render,
    bench_stylesheet
);
criterion_main!(benches);
