//! Mock collaborators shared by the agent integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use search_reinit_repository::{
    ConfirmableIndex, IndexInitializationError, PendingIndexRegistry, SearchBackendStatus,
    SearchIndex,
};

/// How a mock index behaves when asked to initialize.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Initializes and confirms it.
    Succeed,
    /// Raises an error from `initialize`.
    Fail,
    /// Raises an error for the first `n` calls, then succeeds.
    FailTimes(usize),
    /// Returns Ok but reports itself not initialized.
    Unconfirmed,
    /// Returns Ok and has no confirmation capability.
    NotConfirmable,
    /// Never completes.
    Hang,
}

// Mock index for testing
pub struct MockIndex {
    name: String,
    behavior: Behavior,
    init_calls: AtomicUsize,
    initialized: AtomicBool,
}

impl MockIndex {
    pub fn new(name: &str, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            behavior,
            init_calls: AtomicUsize::new(0),
            initialized: AtomicBool::new(false),
        })
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchIndex for MockIndex {
    fn name(&self) -> &str {
        &self.name
    }

    async fn initialize(&self) -> Result<(), IndexInitializationError> {
        let call = self.init_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            Behavior::Succeed | Behavior::NotConfirmable => {
                self.initialized.store(true, Ordering::SeqCst);
                Ok(())
            }
            Behavior::Fail => Err(IndexInitializationError::backend(format!(
                "core '{}' could not be reached",
                self.name
            ))),
            Behavior::FailTimes(n) if call < n => {
                Err(IndexInitializationError::backend("connection refused"))
            }
            Behavior::FailTimes(_) => {
                self.initialized.store(true, Ordering::SeqCst);
                Ok(())
            }
            Behavior::Unconfirmed => Ok(()),
            Behavior::Hang => {
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }

    fn as_confirmable(&self) -> Option<&dyn ConfirmableIndex> {
        match self.behavior {
            Behavior::NotConfirmable => None,
            _ => Some(self),
        }
    }
}

impl ConfirmableIndex for MockIndex {
    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }
}

// Mock backend status backed by the real pending registry
pub struct MockStatus {
    alive: AtomicBool,
    registry: PendingIndexRegistry,
    liveness_checks: AtomicUsize,
    unset_calls: Mutex<Vec<String>>,
    override_calls: Mutex<Vec<bool>>,
}

impl MockStatus {
    pub fn new(alive: bool, indexes: &[Arc<MockIndex>]) -> Arc<Self> {
        let registry = PendingIndexRegistry::new();
        for index in indexes {
            registry.register(index.clone());
        }

        Arc::new(Self {
            alive: AtomicBool::new(alive),
            registry,
            liveness_checks: AtomicUsize::new(0),
            unset_calls: Mutex::new(Vec::new()),
            override_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_alive(&self, alive: bool) {
        self.alive.store(alive, Ordering::SeqCst);
    }

    pub fn liveness_checks(&self) -> usize {
        self.liveness_checks.load(Ordering::SeqCst)
    }

    pub fn unset_calls(&self) -> Vec<String> {
        self.unset_calls.lock().unwrap().clone()
    }

    pub fn override_calls(&self) -> Vec<bool> {
        self.override_calls.lock().unwrap().clone()
    }

    pub fn pending_names(&self) -> Vec<String> {
        self.registry
            .pending()
            .iter()
            .map(|i| i.name().to_string())
            .collect()
    }
}

#[async_trait]
impl SearchBackendStatus for MockStatus {
    async fn is_alive(&self) -> bool {
        self.liveness_checks.fetch_add(1, Ordering::SeqCst);
        self.alive.load(Ordering::SeqCst)
    }

    fn indexes_pending_init(&self) -> Vec<Arc<dyn SearchIndex>> {
        self.registry.pending()
    }

    fn unset_pending(&self, index: &dyn SearchIndex) {
        self.unset_calls.lock().unwrap().push(index.name().to_string());
        self.registry.unregister(index.name());
    }

    fn set_backend_check_override(&self, ok: bool) {
        self.override_calls.lock().unwrap().push(ok);
    }
}
