use std::collections::HashMap;

use parking_lot::Mutex;

use crate::models::{Module, Outcome, Snapshot};

/// Collects the outcome of every module lookup from concurrent workers.
///
/// One lock guards the map and is held for a single write or a single copy.
/// The last `report` for a module wins.
#[derive(Debug, Default)]
pub struct ResultStore {
    modules: Mutex<HashMap<Module, Outcome>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module as in flight. Leaves any existing entry untouched.
    pub fn start(&self, module: &Module) {
        self.modules
            .lock()
            .entry(module.clone())
            .or_insert(Outcome::Pending);
    }

    /// Record the outcome for `module`, replacing any earlier one.
    pub fn report(&self, module: &Module, outcome: Outcome) {
        log::debug!("{} -> {:?}", module, outcome);
        self.modules.lock().insert(module.clone(), outcome);
    }

    /// Copy the current contents out from under the lock.
    pub fn snapshot(&self) -> Snapshot {
        self.modules.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.modules.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.lock().is_empty()
    }
}
