use crate::canvas2d::CanvasSurface;
use crate::perf::Scope;
use crate::state::AppState;
use coulomb_solver::{FieldRenderer, Inputs};
use leptos::logging::{error, log, warn};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! { <FieldView/> }
}

#[component]
fn FieldView() -> impl IntoView {
    let app = AppState::new(Inputs::default());
    let renderer = FieldRenderer::default();
    let (w, h) = (
        renderer.config().width as u32,
        renderer.config().height as u32,
    );

    view! {
      <main class="min-h-screen flex flex-col items-center gap-4 p-6 bg-zinc-950 text-zinc-100">
        <h2 class="font-semibold text-lg">"Electric field of two point charges"</h2>

        <section class="flex gap-6 text-sm">
          <NumberField label="q1 (µC)" value=app.q1/>
          <NumberField label="q2 (µC)" value=app.q2/>
          <NumberField label="distance (m)" value=app.distance/>
        </section>

        <div class="relative">
          <FieldCanvas app=app renderer=renderer width=w height=h/>
          <div class="absolute right-2 top-2 px-2 py-1 rounded bg-black/60 text-lime-400 text-xs font-mono pointer-events-none whitespace-pre">
            {move || app.hud_text.get()}
          </div>
        </div>

        <p class="font-mono">{move || app.readout.get()}</p>
      </main>
    }
}

#[component]
fn NumberField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
      <label class="flex flex-col gap-1">
        <span class="uppercase tracking-wide opacity-70">{label}</span>
        <input type="number" step="0.1"
          class="w-32 px-2 py-1 rounded bg-zinc-800 font-mono"
          bind:value=value/>
      </label>
    }
}

#[component]
fn FieldCanvas(app: AppState, renderer: FieldRenderer, width: u32, height: u32) -> impl IntoView {
    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();
    let surface_sig: RwSignal<Option<CanvasSurface>, LocalStorage> = RwSignal::new_local(None);

    canvas_ref.on_load(move |canvas| {
        match CanvasSurface::new(canvas) {
            Ok(surface) => {
                let (cw, ch) = surface.size();
                log!("canvas ready {cw}x{ch}");
                surface_sig.set(Some(surface));
            }
            Err(e) => {
                error!("canvas init: {e:?}");
                app.readout.set("Canvas 2D is not available".into());
                return;
            }
        }

        // one redraw per input change, plus the initial one when the
        // effect first runs
        Effect::new(move |_| {
            let q1 = app.q1.get();
            let q2 = app.q2.get();
            let distance = app.distance.get();

            surface_sig.update_untracked(|opt| {
                let Some(surface) = opt.as_mut() else {
                    return;
                };
                let timer = Scope::new("redraw");
                let result = renderer.render_text(surface, &q1, &q2, &distance);
                let ms = timer.stop();
                let n = app.bump_redraws();

                match result {
                    Ok(frame) => {
                        app.readout.set(frame.force.to_string());
                        app.hud_text
                            .set(format!("#{n} | {} arrows | {ms:.2} ms", frame.arrows));
                    }
                    Err(e) => {
                        warn!("redraw #{n}: {e}");
                        app.readout.set(e.to_string());
                        app.hud_text.set(format!("#{n} | no frame"));
                    }
                }
            });
        });
    });

    view! {
      <canvas node_ref=canvas_ref width=width height=height
        class="block border border-zinc-800 bg-white"></canvas>
    }
}
