// ui.rs - Draws the board and control row from controller snapshots

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = match self.controller.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("cannot read simulation state: {err}");
                return;
            }
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if snapshot.running { "⏹ Stop" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    let result = self.controller.toggle_running();
                    self.dispatch("play/stop", result);
                }

                if ui.add_enabled(!snapshot.running, egui::Button::new("Clear")).clicked() {
                    let result = self.controller.clear();
                    self.dispatch("clear", result);
                }

                if ui.add_enabled(!snapshot.running, egui::Button::new("🎲 Random")).clicked() {
                    let result = self.controller.randomize();
                    self.dispatch("randomize", result);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                let selected = self.patterns.get(self.selected_pattern).copied().unwrap_or_default();
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, name) in self.patterns.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, *name);
                        }
                    });

                if ui.add_enabled(!snapshot.running, egui::Button::new("Load")).clicked() {
                    let result = self.controller.load_pattern(selected);
                    self.dispatch("load pattern", result);
                }

                ui.separator();

                ui.label(format!("Generation: {}", snapshot.generation));
                if snapshot.stable {
                    ui.label("(stable)");
                }
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::LIGHT_RED, status);
            }

            ui.separator();

            let (rows, cols) = snapshot.grid.dimensions();
            let box_size = 16.0;
            let spacing = 1.0;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * cols as f32 - spacing,
                (box_size + spacing) * rows as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::WHITE);

            let mut clicked_cell = None;
            for (row, col, cell) in snapshot.grid.iter_cells() {
                let x = start_pos.x + col as f32 * (box_size + spacing);
                let y = start_pos.y + row as f32 * (box_size + spacing);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(200)));

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if rect.contains(pos) {
                            clicked_cell = Some((row, col));
                        }
                    }
                }
            }

            // Clicks while running are still forwarded so the rejection shows.
            if let Some((row, col)) = clicked_cell {
                let result = self.controller.toggle_cell(row, col);
                self.dispatch("toggle cell", result);
            }

            ui.separator();

            let live_cells = snapshot.grid.population();
            let total = (rows * cols).max(1);
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        // Keep pulling snapshots while the tick task is advancing.
        if snapshot.running {
            ctx.request_repaint_after(self.controller.interval());
        }
    }
}
