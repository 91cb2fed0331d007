//! Log throttling for driver fault reports.

use std::sync::Mutex;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(5);
const BURST: u32 = 10;

/// Allows a bounded number of log emissions per time window: up to `BURST`
/// messages each `WINDOW`, then suppression with a summary once the window
/// rolls over.
#[derive(Debug)]
pub(crate) struct LogThrottle {
    state: Mutex<ThrottleState>,
}

#[derive(Debug)]
struct ThrottleState {
    window_start: Option<Instant>,
    emitted: u32,
    suppressed: u64,
}

impl LogThrottle {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(ThrottleState {
                window_start: None,
                emitted: 0,
                suppressed: 0,
            }),
        }
    }

    /// True when the caller may emit a log line now.
    pub(crate) fn allow(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();

        let window_open = state
            .window_start
            .is_some_and(|start| now.duration_since(start) < WINDOW);
        if !window_open {
            if state.suppressed > 0 {
                tracing::warn!(
                    suppressed = state.suppressed,
                    "property fault reports suppressed"
                );
            }
            state.window_start = Some(now);
            state.emitted = 0;
            state.suppressed = 0;
        }

        if state.emitted < BURST {
            state.emitted += 1;
            true
        } else {
            state.suppressed += 1;
            false
        }
    }
}
