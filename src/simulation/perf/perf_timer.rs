/// Wall-clock stopwatch: `js_sys::Date` in the browser, `Instant` natively.
/// Only used for telemetry, never for the simulation itself.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(target_arch = "wasm32")]
    lap_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
    #[cfg(not(target_arch = "wasm32"))]
    lap: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let now = js_sys::Date::now();
            PerfTimer { start_ms: now, lap_ms: now }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let now = std::time::Instant::now();
            PerfTimer { start: now, lap: now }
        }
    }

    /// Milliseconds since `start`
    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Milliseconds since the previous lap (or `start`), then restart the lap
    pub(crate) fn lap_ms(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            let now = js_sys::Date::now();
            let lap = now - self.lap_ms;
            self.lap_ms = now;
            lap
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let now = std::time::Instant::now();
            let lap = now.duration_since(self.lap).as_secs_f64() * 1000.0;
            self.lap = now;
            lap
        }
    }
}
