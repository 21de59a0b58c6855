//! Counter store walkthrough.
//!
//! Run with `RUST_LOG=tally=trace cargo run --example counter` to see the
//! store's own logging.

use tally::counter::{decrement, increment, reset, CounterAction, CounterReducer};
use tally::{DispatchError, StoreBuilder};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let store = StoreBuilder::new()
        .reducer(CounterReducer)
        .history(32)
        .build()?;

    let reader = store.clone();
    let subscription = store.subscribe(move || {
        println!("Current count: {}", reader.get_state().count);
    });

    store.dispatch(increment())?; // Current count: 1
    store.dispatch(increment())?; // Current count: 2
    store.dispatch(decrement())?; // Current count: 1
    store.dispatch(reset())?; // Current count: 0

    // Actions arriving as data from another layer.
    for raw in [r#"{"type":"INCREMENT"}"#, r#"{"type":"NOT_A_REAL_ACTION"}"#] {
        let action: CounterAction = serde_json::from_str(raw)?;
        let report = store.dispatch(action)?;
        println!("{raw} -> changed: {}", report.changed);
    }

    subscription.unsubscribe();
    store.dispatch(increment())?; // no output

    // A failing subscriber does not stop the others under the default policy.
    store.subscribe(|| panic!("display went away"));
    let reader = store.clone();
    store.subscribe(move || println!("Still listening at {}", reader.get_state().count));
    match store.dispatch(increment()) {
        Err(error @ DispatchError::SubscribersPanicked { .. }) => {
            println!("dispatch committed with errors: {error}");
        }
        other => println!("unexpected outcome: {other:?}"),
    }

    if let Some(history) = store.history() {
        let path: Vec<i64> = history.get_path().iter().map(|state| state.count).collect();
        println!("path: {path:?}");
    }

    Ok(())
}
