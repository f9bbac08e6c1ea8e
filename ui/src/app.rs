use crate::{state::State, widgets};

pub const TITLE: &str = "Product Categories";

pub struct CatalogApp {
    pub state: State,
}

impl CatalogApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for CatalogApp {
    /// Called each time the UI needs repainting. Everything visible is
    /// derived again from `state` on every call.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(TITLE);
            ui.add_space(8.0);

            actions.extend(widgets::filter_panel(&self.state, ui));
            ui.add_space(12.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                actions.extend(widgets::product_table(&self.state, ui));
            });
        });

        // Applied after layout so this frame rendered one consistent selection.
        if !actions.is_empty() {
            self.state.apply(actions);
            ctx.request_repaint();
        }
    }
}
