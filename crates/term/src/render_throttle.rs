//! Redraw gating for when nothing is moving.
//!
//! While the frame loop runs, every frame is drawn. While it is cancelled
//! (title screen, paused, game over) the screen only changes when the
//! snapshot does, so redraws happen on a fingerprint change or at most once
//! per `min_static_interval_ms` to pick up terminal damage.

/// Redraw period while static.
pub const STATIC_REDRAW_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to draw at `now_ms`; records the draw when true.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last draw so the next call renders (e.g. after a resize).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REDRAW_MS)
    }
}
