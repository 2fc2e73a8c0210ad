/// Host-supplied timing for one evaluation step.
///
/// The kernel owns no clock: `now_ms` is whatever monotonic millisecond
/// reading the host loop passes in, and `dt_seconds` is the elapsed time
/// since the previous step. Time-gated nodes compare against `now_ms` only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub now_ms: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn millis_since(&self, earlier_ms: u64) -> u64 {
        self.now_ms.saturating_sub(earlier_ms)
    }
}
