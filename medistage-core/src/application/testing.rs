// medistage-core/src/application/testing.rs
//
// Shared test doubles for the application layer: a scriptable StagingStore
// recording every call, and a progress sink capturing events.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::progress::{ProgressEvent, ProgressSink};
use crate::error::MedistageError;
use crate::ports::store::StagingStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Timeout(u32),
    Scalar(String),
    Procedure(String),
    Execute(String),
}

pub enum ScalarResponse {
    Value(Option<i64>),
    Fail,
}

#[derive(Default)]
pub struct MockStore {
    pub calls: Mutex<Vec<StoreCall>>,
    scalar_queue: Mutex<VecDeque<ScalarResponse>>,
    procedure_results: Mutex<HashMap<String, Option<i32>>>,
    failing_procedures: Mutex<HashSet<String>>,
    disconnects: AtomicUsize,
}

impl MockStore {
    /// Store whose preflight count queries report the given pending rows.
    pub fn with_counts(study: i64, series: i64) -> Self {
        let store = Self::default();
        store.push_scalar(Some(study));
        store.push_scalar(Some(series));
        store
    }

    pub fn push_scalar(&self, value: Option<i64>) {
        self.scalar_queue
            .lock()
            .unwrap()
            .push_back(ScalarResponse::Value(value));
    }

    pub fn push_scalar_failure(&self) {
        self.scalar_queue
            .lock()
            .unwrap()
            .push_back(ScalarResponse::Fail);
    }

    /// Script the ReturnStatus of a procedure (keyed by qualified name).
    /// Unscripted procedures succeed with 0.
    pub fn set_procedure_result(&self, qualified_name: &str, result: Option<i32>) {
        self.procedure_results
            .lock()
            .unwrap()
            .insert(qualified_name.to_string(), result);
    }

    /// Make a procedure call fault at the store level (connectivity/timeout).
    pub fn fail_procedure(&self, qualified_name: &str) {
        self.failing_procedures
            .lock()
            .unwrap()
            .insert(qualified_name.to_string());
    }

    pub fn procedure_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                StoreCall::Procedure(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn executed_statements(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                StoreCall::Execute(sql) => Some(sql.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StagingStore for MockStore {
    async fn set_command_timeout(&self, seconds: u32) -> Result<(), MedistageError> {
        self.calls.lock().unwrap().push(StoreCall::Timeout(seconds));
        Ok(())
    }

    async fn query_scalar(&self, sql: &str) -> Result<Option<i64>, MedistageError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Scalar(sql.to_string()));
        match self.scalar_queue.lock().unwrap().pop_front() {
            Some(ScalarResponse::Value(value)) => Ok(value),
            Some(ScalarResponse::Fail) => Err(MedistageError::InternalError(
                "simulated store failure".to_string(),
            )),
            None => Ok(Some(0)),
        }
    }

    async fn call_procedure(&self, qualified_name: &str) -> Result<Option<i32>, MedistageError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Procedure(qualified_name.to_string()));
        if self
            .failing_procedures
            .lock()
            .unwrap()
            .contains(qualified_name)
        {
            return Err(MedistageError::InternalError(
                "simulated procedure fault".to_string(),
            ));
        }
        Ok(self
            .procedure_results
            .lock()
            .unwrap()
            .get(qualified_name)
            .copied()
            .unwrap_or(Some(0)))
    }

    async fn execute(&self, sql: &str) -> Result<(), MedistageError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Execute(sql.to_string()));
        Ok(())
    }

    async fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}
