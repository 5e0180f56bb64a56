use coulomb_solver::Inputs;
use leptos::prelude::*;

/// Everything the page reacts to. Inputs are kept as the raw text of the
/// fields; parsing happens on redraw.
#[derive(Clone, Copy)]
pub struct AppState {
    pub q1: RwSignal<String>,
    pub q2: RwSignal<String>,
    pub distance: RwSignal<String>,

    // outputs
    pub readout: RwSignal<String>,
    pub hud_text: RwSignal<String>,
    pub redraws: RwSignal<u64>,
}

impl AppState {
    pub fn new(initial: Inputs) -> Self {
        Self {
            q1: RwSignal::new(initial.q1_micro.to_string()),
            q2: RwSignal::new(initial.q2_micro.to_string()),
            distance: RwSignal::new(initial.distance_m.to_string()),

            readout: RwSignal::new(String::new()),
            hud_text: RwSignal::new(String::new()),
            redraws: RwSignal::new(0),
        }
    }

    #[inline]
    pub fn bump_redraws(&self) -> u64 {
        self.redraws.update(|k| *k = k.wrapping_add(1));
        self.redraws.get_untracked()
    }
}
