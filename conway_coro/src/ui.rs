// ui.rs - egui front end: controls, grid painter, statistics

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use life_engine::{Coord, patterns};

use crate::{GameOfLife, GameOfLifeInterface, frame_interval};

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Async Conway's Game of Life (Row Coroutines)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    self.status = None;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation()));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.update_interval.as_secs_f32();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = frame_interval(speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            if let Some(status) = &self.status {
                ui.colored_label(Color32::YELLOW, status);
            } else {
                ui.label("Click cells to toggle them while paused. Use Start/Pause to run the simulation.");
            }

            ui.separator();

            // Grid, scaled to the available width
            let (columns, rows) = self.grid.dimensions();
            let cell_size = (ui.available_width() / columns as f32).clamp(1.0, 15.0);
            let spacing = if cell_size >= 4.0 { 0.5 } else { 0.0 };
            let total_size = Vec2::new(cell_size * columns as f32, cell_size * rows as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::from_gray(20));

            for (coord, alive) in self.grid.cells() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(coord.column as f32, coord.row as f32) * cell_size,
                    Vec2::splat(cell_size - spacing),
                );
                let color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 0.0, color);
            }

            // Clicking toggles a cell, only when not running
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = (pos - origin) / cell_size;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        self.toggle_cell(Coord::new(offset.x as usize, offset.y as usize));
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = columns * rows;
            let live_cells = self.grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep animating while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
