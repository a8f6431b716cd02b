#![allow(dead_code)]

use signalman::{BoxError, Callback, Manager, Origin, Value};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Origins
// ============================================================================

pub struct Emitter {
    pub name: &'static str,
}

impl Origin for Emitter {
    fn kind(&self) -> &'static str {
        "Emitter"
    }
}

pub struct Animal;

impl Origin for Animal {
    fn kind(&self) -> &'static str {
        "Animal"
    }
}

pub struct Dog;

impl Origin for Dog {
    fn kind(&self) -> &'static str {
        "Dog"
    }

    fn responds_to_kind(&self, kind: &str) -> bool {
        kind == "Dog" || kind == "Animal"
    }
}

pub fn origin(source: impl Origin) -> Arc<dyn Origin> {
    Arc::new(source)
}

// ============================================================================
// Test Callbacks
// ============================================================================

pub fn unit(_args: &[Value]) -> Result<Value, BoxError> {
    Ok(Value::Unit)
}

pub fn boom(_args: &[Value]) -> Result<Value, BoxError> {
    Err("intentional failure".into())
}

/// Records a label into a shared log, for ordering assertions.
pub struct Labelled {
    pub label: &'static str,
    pub log: Arc<Mutex<Vec<&'static str>>>,
}

impl Callback for Labelled {
    fn invoke(&self, _args: &[Value]) -> Result<Value, BoxError> {
        self.log.lock().unwrap().push(self.label);
        Ok(Value::of(self.label))
    }
}

/// Re-enters the manager with a derived signal when invoked.
pub struct Relay {
    pub manager: Arc<Manager>,
    pub origin: Arc<dyn Origin>,
    pub signal: &'static str,
}

impl Callback for Relay {
    fn invoke(&self, _args: &[Value]) -> Result<Value, BoxError> {
        let outcomes = self.manager.dispatch(&self.origin, self.signal, &[])?;
        Ok(Value::of(outcomes.len()))
    }
}
