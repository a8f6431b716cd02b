//! Dispatch loop behavior: collection ownership, stop short-circuiting,
//! meta-dispatch, reentrancy, and fault propagation.

use signalman::testing::{CountingCallback, RecordingCallback, StopCallback, echo};
use signalman::{
    Callback, DispatchError, Manager, Outcome, RESULT_SIGNAL, Sender, Value,
};

mod common;
use common::{Emitter, Relay, boom, origin, unit};

#[test]
fn wildcard_handler_delivers_the_argument() {
    let manager = Manager::new();
    manager.register(Sender::Any, "greet", echo).unwrap();

    let source = origin(Emitter { name: "x" });
    let outcomes = manager
        .dispatch(&source, "greet", &[Value::of(String::from("hi"))])
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    let value = outcomes.last().unwrap().value();
    assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("hi"));
}

#[test]
fn no_handlers_is_an_empty_collection_not_an_error() {
    let manager = Manager::new();
    let source = origin(Emitter { name: "x" });

    let outcomes = manager.dispatch(&source, "unheard", &[]).unwrap();
    assert!(outcomes.is_empty());
    assert_eq!(outcomes.stopped(), None);
}

#[test]
fn stop_halts_all_later_handlers() {
    let manager = Manager::new();
    let unreached = CountingCallback::new();
    manager.register_at(Sender::Any, "gate", 1, StopCallback).unwrap();
    manager
        .register_at(Sender::Any, "gate", 2, unreached.clone())
        .unwrap();

    let source = origin(Emitter { name: "x" });
    let outcomes = manager.dispatch(&source, "gate", &[]).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes.stopped(), Some(true));
    assert_eq!(unreached.count(), 0, "handler after STOP must never run");
}

#[test]
fn exhausted_walk_reports_not_stopped() {
    let manager = Manager::new();
    manager.register(Sender::Any, "work", unit).unwrap();
    manager.register(Sender::Any, "work", unit).unwrap();

    let source = origin(Emitter { name: "x" });
    let outcomes = manager.dispatch(&source, "work", &[]).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes.stopped(), Some(false));
}

#[test]
fn duplicate_registration_fires_twice() {
    let manager = Manager::new();
    let counter = CountingCallback::new();
    manager.register(Sender::Any, "work", counter.clone()).unwrap();
    manager.register(Sender::Any, "work", counter.clone()).unwrap();

    let source = origin(Emitter { name: "x" });
    manager.dispatch(&source, "work", &[]).unwrap();
    assert_eq!(counter.count(), 2);
}

#[test]
fn callback_fault_propagates_and_loses_the_collection() {
    let manager = Manager::new();
    let before = CountingCallback::new();
    manager.register_at(Sender::Any, "risky", 1, before.clone()).unwrap();
    manager.register_at(Sender::Any, "risky", 2, boom).unwrap();

    let source = origin(Emitter { name: "x" });
    let error = manager.dispatch(&source, "risky", &[]).unwrap_err();

    assert!(matches!(
        &error,
        DispatchError::Callback { signal, .. } if signal == "risky"
    ));
    // the first handler did run; its outcome is simply not returned
    assert_eq!(before.count(), 1);
}

#[test]
fn every_outcome_is_observed_via_the_result_signal() {
    let manager = Manager::new();
    let observer = RecordingCallback::new();
    manager
        .register(Sender::Any, RESULT_SIGNAL, observer.clone())
        .unwrap();
    manager.register(Sender::Any, "work", unit).unwrap();
    manager.register(Sender::Any, "work", unit).unwrap();

    let source = origin(Emitter { name: "x" });
    let outcomes = manager.dispatch(&source, "work", &[]).unwrap();

    // the observer saw both outcomes, once each, and its own outcomes were
    // not re-observed (the manager-origin guard bounds the recursion)
    assert_eq!(observer.count(), 2);
    for call in observer.calls() {
        let seen = call[0].downcast_ref::<Outcome>().expect("observer receives the outcome");
        assert_eq!(seen.signal(), "work");
        assert_eq!(seen.origin().kind(), "Emitter");
    }

    // the primary collection contains only the primary handlers' outcomes
    assert_eq!(outcomes.len(), 2);
}

#[test]
fn observer_stop_does_not_halt_the_primary_walk() {
    let manager = Manager::new();
    manager
        .register(Sender::Any, RESULT_SIGNAL, StopCallback)
        .unwrap();
    manager.register(Sender::Any, "work", unit).unwrap();
    manager.register(Sender::Any, "work", unit).unwrap();

    let source = origin(Emitter { name: "x" });
    let outcomes = manager.dispatch(&source, "work", &[]).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes.stopped(), Some(false));
}

#[test]
fn callbacks_may_reenter_dispatch() {
    let manager = Manager::new();
    let inner_counter = CountingCallback::new();
    manager.register(Sender::Any, "inner", inner_counter.clone()).unwrap();

    let relay = Relay {
        manager: manager.clone(),
        origin: origin(Emitter { name: "relay" }),
        signal: "inner",
    };
    manager.register(Sender::Any, "outer", relay).unwrap();
    manager.register(Sender::Any, "outer", unit).unwrap();

    let source = origin(Emitter { name: "x" });
    let outcomes = manager.dispatch(&source, "outer", &[]).unwrap();

    // the nested dispatch ran to completion without clobbering the outer
    // collection, which still sees both outer handlers
    assert_eq!(inner_counter.count(), 1);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes.get(0).unwrap().value().downcast_ref::<usize>(),
        Some(&1),
        "relay reports the nested collection's length"
    );
}

#[test]
fn registration_during_a_walk_is_snapshot_isolated() {
    struct RegisterMore {
        manager: std::sync::Arc<Manager>,
        counter: CountingCallback,
    }

    impl Callback for RegisterMore {
        fn invoke(&self, _args: &[Value]) -> Result<Value, signalman::BoxError> {
            self.manager
                .register_at(Sender::Any, "gate", 9000, self.counter.clone())?;
            Ok(Value::Unit)
        }
    }

    let manager = Manager::new();
    let counter = CountingCallback::new();
    manager
        .register(
            Sender::Any,
            "gate",
            RegisterMore {
                manager: manager.clone(),
                counter: counter.clone(),
            },
        )
        .unwrap();

    let source = origin(Emitter { name: "x" });
    manager.dispatch(&source, "gate", &[]).unwrap();
    assert_eq!(counter.count(), 0, "a walk never sees handlers added during it");

    manager.dispatch(&source, "gate", &[]).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn each_dispatch_owns_a_fresh_collection() {
    let manager = Manager::new();
    manager.register(Sender::Any, "work", unit).unwrap();

    let source = origin(Emitter { name: "x" });
    let first = manager.dispatch(&source, "work", &[]).unwrap();
    let second = manager.dispatch(&source, "work", &[]).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
