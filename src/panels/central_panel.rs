use crate::SketchApp;
use crate::renderer::Renderer;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let editor = app.editor();
        let size = editor.grid().size();
        ui.label(format!(
            "{} · {} · {}x{}",
            editor.mode().name(),
            editor.active_color(),
            size,
            size
        ));

        let canvas_rect = Renderer::canvas_rect(ui.available_rect_before_wrap().shrink(8.0));
        let _response = ui
            .allocate_rect(canvas_rect, egui::Sense::click_and_drag())
            .on_hover_cursor(egui::CursorIcon::Crosshair);

        // Handle input
        app.handle_input(ctx, ui.layer_id(), canvas_rect);

        // Render the canvas
        app.renderer().render(ui.painter(), canvas_rect);
    });
}
