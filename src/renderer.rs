// src/renderer.rs
use eframe::egui::{self, Color32, Rect, Stroke};

use crate::color::Color;
use crate::grid::CellPos;
use crate::sink::RenderSink;

/// State of the custom color controls (picker and hex field)
#[derive(Debug, Clone, PartialEq)]
pub struct ColorControl {
    pub picker: Color32,
    pub hex: String,
    /// Set when the last typed value could not be parsed
    pub rejected: bool,
}

impl ColorControl {
    pub fn new(color: Color) -> Self {
        Self {
            picker: color.into(),
            hex: color.to_hex(),
            rejected: false,
        }
    }
}

/// Draws the canvas from the paint commands it receives
#[derive(Debug)]
pub struct Renderer {
    size: usize,
    cells: Vec<Color32>,
    show_grid_lines: bool,
    color_control: ColorControl,
}

impl Renderer {
    /// Creates a renderer for an empty `size`x`size` canvas
    ///
    /// Args:
    ///     size (usize): Grid dimension; cells start out transparent until painted
    ///     active_color (Color): Initial value of the custom color controls
    pub fn new(size: usize, active_color: Color) -> Self {
        Self {
            size,
            cells: vec![Color32::TRANSPARENT; size * size],
            show_grid_lines: false,
            color_control: ColorControl::new(active_color),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_color(&self, cell: CellPos) -> Option<Color32> {
        if cell.row < self.size && cell.col < self.size {
            self.cells.get(cell.row * self.size + cell.col).copied()
        } else {
            None
        }
    }

    pub fn color_control(&self) -> &ColorControl {
        &self.color_control
    }

    pub fn color_control_mut(&mut self) -> &mut ColorControl {
        &mut self.color_control
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    /// Largest square that fits in `available`, centered in it
    pub fn canvas_rect(available: Rect) -> Rect {
        let side = available.width().min(available.height()).max(0.0);
        Rect::from_center_size(available.center(), egui::vec2(side, side))
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The square canvas area
    pub fn render(&self, painter: &egui::Painter, rect: Rect) {
        if self.size == 0 {
            return;
        }
        let cell_size = rect.width() / self.size as f32;

        for (index, color) in self.cells.iter().enumerate() {
            let row = index / self.size;
            let col = index % self.size;
            let min = rect.min + egui::vec2(col as f32 * cell_size, row as f32 * cell_size);
            // Slight overlap hides seams between neighboring cells
            let cell_rect = Rect::from_min_size(min, egui::vec2(cell_size + 0.5, cell_size + 0.5));
            painter.rect_filled(cell_rect.intersect(rect), 0.0, *color);
        }

        if self.show_grid_lines && cell_size >= 4.0 {
            let stroke = Stroke::new(1.0, Color32::from_gray(200));
            for i in 1..self.size {
                let offset = i as f32 * cell_size;
                painter.vline(rect.min.x + offset, rect.y_range(), stroke);
                painter.hline(rect.x_range(), rect.min.y + offset, stroke);
            }
        }

        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(120)));
    }
}

impl RenderSink for Renderer {
    fn paint_cell(&mut self, cell: CellPos, color: Color) {
        if cell.row < self.size && cell.col < self.size {
            self.cells[cell.row * self.size + cell.col] = color.into();
        } else {
            log::warn!(
                "Ignoring paint outside the {}x{} canvas: {:?}",
                self.size,
                self.size,
                cell
            );
        }
    }

    fn rebuild(&mut self, size: usize) {
        self.size = size;
        self.cells = vec![Color32::TRANSPARENT; size * size];
    }

    fn sync_custom_color(&mut self, color: Color) {
        self.color_control = ColorControl::new(color);
    }
}
