use catalog_business::CatalogConfig;
use catalog_ui::CatalogApp;
use catalog_ui::state::State;
use egui_kittest::Harness;

/// Frames to run after an interaction so applied actions are rendered.
pub const UI_PROPAGATION_FRAMES: usize = 3;

pub struct TestCtx<'a> {
    harness: Harness<'a, CatalogApp>,
}

impl<'a> TestCtx<'a> {
    pub fn new_app() -> Self {
        Self::new_app_with_config(CatalogConfig::default())
    }

    pub fn new_app_with_config(config: CatalogConfig) -> Self {
        let state = State::test_with_config(config).expect("embedded fixtures should load");
        let app = CatalogApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(900.0, 720.0))
            .build_eframe(|_| app);

        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, CatalogApp> {
        &mut self.harness
    }

    /// Runs enough frames for pending actions to show up.
    pub fn settle(&mut self) {
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }

    /// Product ids in the order the app currently derives them.
    pub fn visible_ids(&self) -> Vec<u32> {
        self.harness
            .state()
            .state
            .visible_products()
            .iter()
            .map(|product| product.id)
            .collect()
    }
}
