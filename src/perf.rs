use leptos_use::use_window;

pub fn now_ms() -> f64 {
    use_window()
        .as_ref()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Times a labelled span. The span is logged once, either by `stop`, which
/// also hands the duration back, or on drop.
pub struct Scope<'a> {
    label: &'a str,
    start: f64,
    stopped: bool,
}

impl<'a> Scope<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            start: now_ms(),
            stopped: false,
        }
    }

    pub fn stop(mut self) -> f64 {
        self.stopped = true;
        self.report()
    }

    fn report(&self) -> f64 {
        let dt = now_ms() - self.start;
        web_sys::console::debug_1(&span_message(self.label, dt).into());
        dt
    }
}

impl<'a> Drop for Scope<'a> {
    fn drop(&mut self) {
        if !self.stopped {
            self.report();
        }
    }
}

fn span_message(label: &str, dt_ms: f64) -> String {
    format!("[perf] {label}: {dt_ms:.3} ms")
}
