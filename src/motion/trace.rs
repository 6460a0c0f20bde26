//! Per-tick diagnostics hook.
//!
//! The executor hands every computed command to a [`TraceSink`]. The default
//! [`NoTrace`] compiles away; [`LogTrace`] forwards to the `log` facade and
//! `DefmtTrace` (feature `defmt`) to defmt.

use super::command::MotionCommand;

/// Snapshot of one executor tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickTrace {
    /// Display name of the active pattern.
    pub pattern: &'static str,
    /// Stroke index the pattern was polled with.
    pub index: u32,
    /// Stroke time the pattern derived from the current tunables, in seconds.
    pub time_of_stroke: f32,
    /// Command returned to the executor.
    pub command: MotionCommand,
}

/// Receiver for tick diagnostics.
pub trait TraceSink {
    /// Record one tick.
    fn record(&mut self, trace: &TickTrace);
}

/// Discards all traces.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn record(&mut self, _trace: &TickTrace) {}
}

impl<F> TraceSink for F
where
    F: FnMut(&TickTrace),
{
    #[inline]
    fn record(&mut self, trace: &TickTrace) {
        self(trace)
    }
}

/// Emits traces through the `log` facade.
///
/// Moves go out at `debug`, skipped ticks at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, trace: &TickTrace) {
        let c = &trace.command;
        if c.skip {
            log::trace!("{} #{}: skip", trace.pattern, trace.index);
        } else {
            log::debug!(
                "{} #{}: t_stroke={} target={} v={} a={}",
                trace.pattern,
                trace.index,
                trace.time_of_stroke,
                c.target,
                c.velocity,
                c.acceleration
            );
        }
    }
}

/// Emits traces through defmt.
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtTrace;

#[cfg(feature = "defmt")]
impl TraceSink for DefmtTrace {
    fn record(&mut self, trace: &TickTrace) {
        defmt::debug!(
            "{=str} #{=u32}: t_stroke={=f32} {}",
            trace.pattern,
            trace.index,
            trace.time_of_stroke,
            trace.command
        );
    }
}
