// medistage-core/src/domain/progress.rs
//
// Progress channel consumed by the external sink (UI, CLI, tests). The
// orchestrator invokes the sink synchronously from its own execution context;
// the sink may be absent entirely.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// 0..=100, relative to the selected branch's total step count.
    pub percent: u8,
    pub message: String,
}

impl ProgressEvent {
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            message: message.into(),
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

// Closures work as sinks out of the box.
impl<F> ProgressSink for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn report(&self, event: ProgressEvent) {
        self(event)
    }
}
