//! Single-panel render: header, activity, input bar, status, optional palette overlay.

use ratatui::Frame;

use crate::app::App;
use crate::dispatch::CommandDispatcher;
use crate::ui::layout;
use crate::ui::widgets::{
    render_activity, render_header, render_input, render_palette, render_status,
};

pub fn render<D: CommandDispatcher>(f: &mut Frame, app: &App<D>) {
    let area = f.area();
    let regions = layout::compute(area);
    let palette = &app.state.palette;

    render_header(f, regions.header, app.catalog().len(), app.matcher().threshold());
    render_activity(f, &app.state.activity, regions.activity);
    render_input(
        f,
        app.state.input_buffer(),
        app.state.input_cursor(),
        palette.visible,
        regions.input,
    );
    render_status(
        f,
        regions.status,
        palette.visible.then_some(palette.rows.len()),
    );

    if palette.visible {
        let overlay = layout::palette_overlay_rect(regions.activity);
        render_palette(f, palette, app.catalog(), overlay);
    }
}
