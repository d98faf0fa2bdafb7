use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::input::CanvasInput;
use crate::palette::ColorInput;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tools::DrawingMode;

/// The desktop front end: an [`Editor`] wired to egui input and a [`Renderer`].
#[derive(Debug)]
pub struct SketchApp {
    editor: Editor,
    renderer: Renderer,
    input: CanvasInput,
    // Slider value; only applied to the grid when the slider is released
    pending_size: usize,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = Editor::new(config);
        let mut renderer = Renderer::new(editor.grid().size(), editor.active_color());
        editor.repaint_all(&mut renderer);

        Self {
            pending_size: editor.grid().size(),
            editor,
            renderer,
            input: CanvasInput::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn pending_size(&self) -> usize {
        self.pending_size
    }

    pub fn pending_size_mut(&mut self) -> &mut usize {
        &mut self.pending_size
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.editor.set_mode(mode);
    }

    pub fn select_preset(&mut self, index: usize) {
        if let Err(err) = self.editor.select_preset(index, &mut self.renderer) {
            log::warn!("Palette selection ignored: {}", err);
        }
    }

    /// Rejected input flags the color controls and puts the active color
    /// back into them; the active color itself stays.
    pub fn select_custom(&mut self, input: ColorInput<'_>) {
        if self.editor.select_custom(input, &mut self.renderer).is_err() {
            let active = self.editor.active_color();
            let control = self.renderer.color_control_mut();
            control.picker = active.into();
            control.hex = active.to_hex();
            control.rejected = true;
        }
    }

    pub fn resize(&mut self, size: usize) {
        self.pending_size = self.editor.resize(size, &mut self.renderer);
        self.input.reset();
    }

    pub fn clear(&mut self) {
        self.editor.clear(&mut self.renderer);
        self.pending_size = self.editor.grid().size();
        self.input.reset();
    }

    /// Feeds this frame's pointer activity to the editor
    pub fn handle_input(
        &mut self,
        ctx: &egui::Context,
        canvas_layer: egui::LayerId,
        canvas_rect: egui::Rect,
    ) {
        let size = self.editor.grid().size();
        let events = self.input.process_input(ctx, canvas_layer, canvas_rect, size);
        for event in events {
            self.editor.handle_input(event, &mut self.renderer);
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
