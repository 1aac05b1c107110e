use plotly::{color::Rgb, common::Title, layout::Axis, Configuration, Layout, Plot};
use shared::FigureVariant;

/// Layout title shown on a placeholder figure.
pub fn figure_title(variant: FigureVariant) -> &'static str {
    match variant {
        FigureVariant::UsPlot => "United States plot",
        FigureVariant::UsTable => "United States table",
        FigureVariant::IntlPlot => "International plot",
        FigureVariant::IntlYear1 => "International 1-year table",
        FigureVariant::IntlYear3 => "International 3-year table",
        FigureVariant::IntlYear5 => "International 5-year table",
    }
}

/// Build the placeholder figure for a resolved variant.
///
/// No traces yet: real plot/table content is not specified, so every branch
/// renders an empty figure distinguished only by its title.
pub fn placeholder_figure(variant: FigureVariant) -> Plot {
    let mut plot = Plot::new();

    let config = Configuration::new().static_plot(true);
    plot.set_configuration(config);

    let black = Rgb::new(0, 0, 0);
    let x_axis = Axis::new().line_color(black).mirror(true);
    let y_axis = Axis::new().line_color(black).mirror(true);
    let layout = Layout::new()
        .auto_size(true)
        .title(Title::with_text(figure_title(variant)))
        .x_axis(x_axis)
        .y_axis(y_axis);
    plot.set_layout(layout);

    plot
}
