use egui_kittest::Harness;

use crate::state::State;

const HARNESS_SIZE: egui::Vec2 = egui::vec2(900.0, 720.0);

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Harness over the embedded fixtures with default configuration.
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_state(app, State::test().expect("embedded fixtures should load"))
    }

    pub fn with_state(app: impl FnMut(&mut egui::Ui, &mut State) + 'a, state: State) -> Self {
        let harness = Harness::builder()
            .with_size(HARNESS_SIZE)
            .build_ui_state(app, state);

        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }
}

/// Frames to run after an interaction so applied actions are rendered.
const UI_PROPAGATION_FRAMES: usize = 3;

pub fn settle(harness: &mut Harness<'_, State>) {
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
}
