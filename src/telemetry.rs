//! Provider telemetry events and sinks.
//!
//! The lenient platform operations swallow some failures and return empty
//! results instead. Each swallowed failure is recorded here as well as logged,
//! so operators can still see why a pipeline file or branch list came back
//! empty.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A failure was converted into an empty successful result.
    FailureSuppressed {
        /// Platform operation that swallowed the failure (e.g. `fetch_file`).
        operation: String,
        /// Rendered error that was suppressed.
        reason: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Writes each event to stderr as one JSON line.
///
/// Selected with `telemetry_stderr = true` in [`crate::ProviderConfig`], for
/// standalone hosts that have no platform telemetry pipeline.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl StderrJsonlTelemetrySink {
    /// Renders `event` as the line this sink writes, without the newline.
    #[must_use]
    pub fn render(event: &TelemetryEvent) -> Option<String> {
        serde_json::to_string(event).ok()
    }
}

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        use io::Write;

        if let Some(line) = Self::render(&event) {
            // Telemetry must never fail a provider call.
            let _unwritten = writeln!(io::stderr().lock(), "{line}");
        }
    }
}

/// Sinks for asserting on recorded telemetry in tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Drains and returns the events recorded so far.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events().drain(..).collect()
        }

        fn events(&self) -> MutexGuard<'_, Vec<TelemetryEvent>> {
            self.events.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events().push(event);
        }
    }
}
