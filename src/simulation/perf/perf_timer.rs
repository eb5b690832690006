/// Millisecond stopwatch for per-phase tick timing.
///
/// On wasm32 it reads the JS wall clock, natively a monotonic `Instant`.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    mark_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    mark: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { mark_ms: crate::core::clock::now_ms() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { mark: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            crate::core::clock::now_ms() - self.mark_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.mark.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Elapsed time since the last mark, then re-mark
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let elapsed = self.elapsed_ms();
        *self = PerfTimer::start();
        elapsed
    }
}
