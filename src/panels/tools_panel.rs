use egui::{Color32, Stroke};

use crate::SketchApp;
use crate::components::ToolButton;
use crate::palette::{ColorInput, PALETTE_COLUMNS};
use crate::tools::DrawingMode;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                let active_mode = app.editor().mode();
                for mode in DrawingMode::ALL {
                    if ToolButton::new(mode, mode == active_mode).show(ui).clicked() {
                        log::info!("Mode selected from UI: {}", mode.name());
                        app.set_mode(mode);
                    }
                }
                ui.add_space(8.0);
                if ui.button("Clear").clicked() {
                    app.clear();
                }
            });

            ui.separator();
            canvas_size_section(app, ui);

            ui.separator();
            color_section(app, ui);
        });
}

fn canvas_size_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Canvas");

    let range = app.editor().config().size_range();
    let response = ui.add(egui::Slider::new(app.pending_size_mut(), range).show_value(false));
    ui.label(format!("{0} x {0}", app.pending_size()));

    // Dragging only previews the size; the grid is rebuilt on release
    if response.drag_stopped() || (response.changed() && !response.dragged()) {
        app.resize(app.pending_size());
    }

    let mut show_grid_lines = app.renderer().show_grid_lines();
    if ui.checkbox(&mut show_grid_lines, "Grid lines").changed() {
        app.renderer_mut().set_show_grid_lines(show_grid_lines);
    }
}

fn color_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Color");

    ui.horizontal(|ui| {
        let mut picked = app.renderer().color_control().picker;
        let alpha = egui::color_picker::Alpha::Opaque;
        if egui::color_picker::color_edit_button_srgba(ui, &mut picked, alpha).changed() {
            app.select_custom(ColorInput::Color(picked.into()));
        }

        let hex_response = ui.add(
            egui::TextEdit::singleline(&mut app.renderer_mut().color_control_mut().hex)
                .desired_width(80.0),
        );
        if hex_response.lost_focus() {
            let text = app.renderer().color_control().hex.clone();
            app.select_custom(ColorInput::Text(&text));
        }
    });

    if app.renderer().color_control().rejected {
        ui.colored_label(Color32::RED, "Not a color: use #rrggbb or rgb(r, g, b)");
    }

    ui.add_space(4.0);

    let active_color = app.editor().active_color();
    let presets = app.editor().palette().presets().to_vec();
    egui::Grid::new("palette_grid")
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            for (index, color) in presets.iter().enumerate() {
                let stroke = if *color == active_color {
                    Stroke::new(2.0, Color32::from_rgb(33, 150, 243))
                } else {
                    Stroke::new(1.0, Color32::from_gray(90))
                };
                let swatch = egui::Button::new("")
                    .fill(Color32::from(*color))
                    .stroke(stroke)
                    .min_size(egui::vec2(18.0, 18.0));

                if ui.add(swatch).on_hover_text(color.to_hex()).clicked() {
                    app.select_preset(index);
                }
                if (index + 1) % PALETTE_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}
