#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

use std::fs;

use eframe::egui;
use egui::{emath, Color32, Frame, Pos2, Rect, Sense, Stroke, Ui};
use one_recognizer::{recognize, Matcher, Point, TemplateStore};
use ron::ser::{to_string_pretty, PrettyConfig};

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 350.0]),
        ..Default::default()
    };
    eframe::run_native(
        "$1 recognizer demo",
        options,
        Box::new(|_| Ok(Box::<DemoApp>::default())),
    )
}

struct DemoApp {
    /// current stroke, in 0-1 normalized canvas coordinates
    line: Vec<Pos2>,
    stroke: Stroke,
    store: TemplateStore,
    use_fast_matcher: bool,
    status: String,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            line: Vec::new(),
            stroke: Stroke::new(1.0, Color32::from_rgb(25, 200, 100)),
            store: TemplateStore::new(),
            use_fast_matcher: false,
            status: String::new(),
        }
    }
}

fn line_to_points(line: &[Pos2]) -> Vec<Point> {
    line.iter().map(|p| Point::new(p.x, p.y)).collect()
}

impl DemoApp {
    fn save_gesture(&mut self) {
        let name = format!("Gesture {}", self.store.names().len() + 1);
        match self.store.add(&name, &line_to_points(&self.line)) {
            Ok(count) => self.status = format!("saved {name} ({count} example(s))"),
            Err(e) => self.status = format!("cannot save gesture: {e}"),
        }
        self.line.clear();
    }

    fn recognize_gesture(&mut self) {
        let matcher = if self.use_fast_matcher {
            Matcher::FastCosine
        } else {
            Matcher::AngularSearch
        };
        let result = recognize(&self.store, &line_to_points(&self.line), matcher);
        self.status = format!(
            "{} (score {:.3}, {:?})",
            result.name, result.score, result.elapsed
        );
    }

    fn export_gestures(&mut self) {
        let data = match to_string_pretty(&self.store.export_all(), PrettyConfig::default()) {
            Ok(data) => data,
            Err(e) => {
                self.status = format!("export failed: {e}");
                return;
            }
        };
        match fs::write("gestures.ron", data) {
            Ok(()) => self.status = "exported to gestures.ron".into(),
            Err(e) => self.status = format!("export failed: {e}"),
        }
    }

    pub fn ui_control(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            if ui.button("Export Gestures").clicked() {
                self.export_gestures();
            }
            if ui.button("Save Gesture").clicked() {
                self.save_gesture()
            }
            if ui.button("Recognize Gesture").clicked() {
                self.recognize_gesture();
            }
            ui.checkbox(&mut self.use_fast_matcher, "fast matcher");
            ui.separator();
            if ui.button("Clear Drawing").clicked() {
                self.line.clear();
                self.status.clear();
            }
            ui.label(self.status.clone());
        })
        .response
    }

    pub fn ui_content(&mut self, ui: &mut Ui) -> egui::Response {
        let (mut response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), Sense::drag());

        let to_screen = emath::RectTransform::from_to(
            Rect::from_min_size(Pos2::ZERO, response.rect.square_proportions()),
            response.rect,
        );
        let from_screen = to_screen.inverse();

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let canvas_pos = from_screen * pointer_pos;
            if response.drag_started() {
                self.line.clear();
            }
            if self.line.last() != Some(&canvas_pos) {
                self.line.push(canvas_pos);
                response.mark_changed();
            }
        }

        if self.line.len() >= 2 {
            let points: Vec<Pos2> = self.line.iter().map(|p| to_screen * *p).collect();
            painter.add(egui::Shape::line(points, self.stroke));
        }

        response
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("gestures").show(ctx, |ui| {
            ui.label("Gestures:");
            for name in self.store.names() {
                let examples = self.store.templates_by_name(&name).len();
                ui.group(|ui| {
                    ui.label(format!("{name} ({examples} example(s))"));
                });
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_control(ui);
            ui.label("Paint a single stroke with your mouse/touch!");
            Frame::canvas(ui.style()).show(ui, |ui| {
                self.ui_content(ui);
            });
        });
    }
}
