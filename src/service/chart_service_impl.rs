use crate::common::*;
use crate::dto::{normalized_series::*, rendered_chart::*};
use crate::model::{configs::chart_config::*, theme::theme_palette::*};
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/* 차트 아래 캡션 영역 높이 (px) */
const CAPTION_AREA_HEIGHT: u32 = 36;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    width: u32,
    height: u32,
}

#[doc = "spawn_blocking 안으로 옮겨갈 수 있도록 렌더링에 필요한 값을 모두 소유한 구조체"]
#[derive(Debug, Clone)]
struct LineChartLayout {
    width: u32,
    height: u32,
    title: String,
    caption: String,
    currency_prefix: String,
    tooltip_label: String,
    line_color: RGBColor,
    background: RGBColor,
    title_color: RGBColor,
    label_color: RGBColor,
    axis_color: RGBColor,
    grid_color: RGBColor,
    caption_color: RGBColor,
    periods: Vec<String>,
    values: Vec<f64>,
    tick_interval: usize,
    y_range: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
struct HoverTarget {
    x: i32,
    y: i32,
    title: String,
}

#[doc = "`#rrggbb` 형식의 색상 문자열을 RGBColor로 변환"]
pub fn parse_hex_color(hex: &str) -> anyhow::Result<RGBColor> {
    let digits: &str = hex.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!("[parse_hex_color] Invalid colour '{}'", hex));
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[doc = "Y축 라벨: 통화 접두어 + 소수점 둘째 자리 반올림 값 (끝자리 0 생략)"]
pub fn format_axis_value(currency_prefix: &str, value: f64) -> String {
    let rounded: f64 = (value * 100.0).round() / 100.0;
    /* -0 표기 방지 */
    let rounded: f64 = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}{}", currency_prefix, rounded)
}

#[doc = "툴팁: `<label>: <prefix><value:.2>`"]
pub fn format_tooltip(tooltip_label: &str, currency_prefix: &str, value: f64) -> String {
    format!("{}: {}{:.2}", tooltip_label, currency_prefix, value)
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[doc = "각 데이터 포인트 위에 툴팁(`<title>`)을 가진 투명한 hover 영역을 `</svg>` 직전에 삽입"]
fn inject_hover_targets(svg: &str, targets: &[HoverTarget]) -> String {
    let mut layer: String = String::from("<g class=\"hover-targets\">");

    for target in targets {
        layer.push_str(&format!(
            concat!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"transparent\" ",
                "pointer-events=\"all\"><title>{}</title></circle>"
            ),
            target.x,
            target.y,
            escape_xml(&target.title)
        ));
    }

    layer.push_str("</g>");

    match svg.rfind("</svg>") {
        Some(pos) => format!("{}{}{}", &svg[..pos], layer, &svg[pos..]),
        None => format!("{}{}", svg, layer),
    }
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, min_val: f64, max_val: f64) -> (f64, f64) {
        let span: f64 = max_val - min_val;
        let padding: f64 = (span * 0.1).max(max_val.abs() * 0.02).max(0.01);

        /* 가격이 모두 0 이상이면 축이 음수로 내려가지 않게 한다 */
        let y_min: f64 = if min_val >= 0.0 {
            (min_val - padding).max(0.0)
        } else {
            min_val - padding
        };
        let y_max: f64 = max_val + padding;

        (y_min, y_max)
    }

    fn build_layout(
        &self,
        chart: &ChartConfig,
        series: &NormalizedSeries,
        palette: &ThemePalette,
    ) -> anyhow::Result<LineChartLayout> {
        let caption: String = series.caption(chart.source()).ok_or_else(|| {
            anyhow!(
                "[ChartServiceImpl->build_layout] Cannot generate chart '{}' with empty data",
                chart.name()
            )
        })?;

        let max_val: f64 = series.max_value().unwrap_or(0.0);
        let min_val: f64 = series.min_value().unwrap_or(0.0);

        Ok(LineChartLayout {
            width: self.width,
            height: self.height,
            title: chart.title().to_string(),
            caption,
            currency_prefix: chart.currency_prefix().to_string(),
            tooltip_label: chart.tooltip_label().to_string(),
            line_color: parse_hex_color(chart.line_color())?,
            background: parse_hex_color(palette.bg_card())?,
            title_color: parse_hex_color(palette.text())?,
            label_color: parse_hex_color(palette.text_muted())?,
            axis_color: parse_hex_color(palette.border_light())?,
            grid_color: parse_hex_color(palette.border())?,
            caption_color: parse_hex_color(palette.text_dim())?,
            periods: series.series().periods().map(str::to_string).collect(),
            values: series.series().values().collect(),
            tick_interval: *series.tick_interval(),
            y_range: self.calculate_y_range(min_val, max_val),
        })
    }
}

#[doc = r#"
    plotters SVG 백엔드로 선 차트를 그리는 동기 함수.

    1. X축은 레코드 인덱스, Y축은 가격. 점 마커 없이 선만 그린다
    2. X축 라벨은 `tick_interval` 배수 인덱스에만 기간을 표시한다
    3. Y축 라벨은 통화 접두어를 붙인다
    4. 하단 캡션 영역에 `Source: ... | Data as of ...` 문구를 쓴다
    5. 그린 뒤 각 포인트의 픽셀 좌표를 모아 hover 툴팁 레이어를 삽입한다
"#]
fn draw_line_chart(layout: &LineChartLayout) -> anyhow::Result<String> {
    let mut buffer: String = String::new();
    let point_count: usize = layout.values.len();
    let x_max: usize = point_count.saturating_sub(1).max(1);
    let (y_min, y_max) = layout.y_range;

    let hover_targets: Vec<HoverTarget> = {
        let root = SVGBackend::with_string(&mut buffer, (layout.width, layout.height))
            .into_drawing_area();
        root.fill(&layout.background)?;

        let (plot_area, caption_area) =
            root.split_vertically(layout.height.saturating_sub(CAPTION_AREA_HEIGHT));

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(
                &layout.title,
                ("sans-serif", 22).into_font().color(&layout.title_color),
            )
            .margin(24)
            .x_label_area_size(48)
            .y_label_area_size(72)
            .build_cartesian_2d(0..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(point_count.max(2))
            .y_labels(8)
            .axis_style(ShapeStyle::from(&layout.axis_color).stroke_width(1))
            .light_line_style(ShapeStyle::from(&layout.grid_color.mix(0.4)).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&layout.grid_color).stroke_width(1))
            .x_label_style(("sans-serif", 12).into_font().color(&layout.label_color))
            .y_label_style(("sans-serif", 12).into_font().color(&layout.label_color))
            .x_label_formatter(&|x| {
                if *x < layout.periods.len() && *x % layout.tick_interval.max(1) == 0 {
                    layout.periods[*x].clone()
                } else {
                    String::new()
                }
            })
            .y_label_formatter(&|y| format_axis_value(&layout.currency_prefix, *y))
            .draw()?;

        chart.draw_series(LineSeries::new(
            layout.values.iter().enumerate().map(|(i, &y)| (i, y)),
            ShapeStyle::from(&layout.line_color).stroke_width(2),
        ))?;

        let targets: Vec<HoverTarget> = layout
            .values
            .iter()
            .zip(layout.periods.iter())
            .enumerate()
            .map(|(i, (&value, period))| {
                let (x, y) = chart.backend_coord(&(i, value));
                HoverTarget {
                    x,
                    y,
                    title: format!(
                        "{}\n{}",
                        period,
                        format_tooltip(&layout.tooltip_label, &layout.currency_prefix, value)
                    ),
                }
            })
            .collect();

        caption_area.draw_text(
            &layout.caption,
            &("sans-serif", 12).into_font().color(&layout.caption_color),
            (24, 8),
        )?;

        root.present()?;
        targets
    };

    Ok(inject_hover_targets(&buffer, &hover_targets))
}

fn draw_placeholder(
    width: u32,
    height: u32,
    title: &str,
    message: &str,
    background: RGBColor,
    title_color: RGBColor,
    message_color: RGBColor,
) -> anyhow::Result<String> {
    let mut buffer: String = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&background)?;

        root.draw_text(
            title,
            &("sans-serif", 22).into_font().color(&title_color),
            (24, 24),
        )?;

        let message_style = ("sans-serif", 16)
            .into_font()
            .color(&message_color)
            .pos(Pos::new(HPos::Center, VPos::Center));

        root.draw_text(
            message,
            &message_style,
            ((width / 2) as i32, (height / 2) as i32),
        )?;

        root.present()?;
    }

    Ok(buffer)
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_chart(
        &self,
        chart: &ChartConfig,
        series: &NormalizedSeries,
        palette: &ThemePalette,
    ) -> anyhow::Result<RenderedChart> {
        let layout: LineChartLayout = self.build_layout(chart, series, palette)?;
        let caption: String = layout.caption.clone();
        let point_count: usize = layout.values.len();

        let handle: tokio::task::JoinHandle<Result<String, anyhow::Error>> =
            tokio::task::spawn_blocking(move || draw_line_chart(&layout));

        let svg: String = handle
            .await
            .context("[ChartServiceImpl->render_chart] blocking task join failed")?
            .context("[ChartServiceImpl->render_chart] drawing/present failed")?;

        info!(
            "Line chart '{}' rendered with {} points",
            chart.name(),
            point_count
        );

        Ok(RenderedChart::new(svg, caption, point_count))
    }

    async fn render_placeholder(
        &self,
        chart: &ChartConfig,
        message: &str,
        palette: &ThemePalette,
    ) -> anyhow::Result<String> {
        let (width, height) = (self.width, self.height);
        let title: String = chart.title().to_string();
        let message: String = message.to_string();
        let background: RGBColor = parse_hex_color(palette.bg_card())?;
        let title_color: RGBColor = parse_hex_color(palette.text())?;
        let message_color: RGBColor = parse_hex_color(palette.text_muted())?;

        let handle: tokio::task::JoinHandle<Result<String, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                draw_placeholder(
                    width,
                    height,
                    &title,
                    &message,
                    background,
                    title_color,
                    message_color,
                )
            });

        handle
            .await
            .context("[ChartServiceImpl->render_placeholder] blocking task join failed")?
            .context("[ChartServiceImpl->render_placeholder] drawing/present failed")
    }
}
