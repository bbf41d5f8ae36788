use std::{
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    dispatcher::DefaultGuard,
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

/// Collects the message of every error-level event while installed.
#[derive(Clone, Default)]
pub struct CapturedErrors(Arc<Mutex<Vec<String>>>);

impl CapturedErrors {
    /// Install as this thread's default subscriber until the guard drops.
    /// `#[tokio::test]` runs on one thread, so handlers log here too.
    pub fn install() -> (Self, DefaultGuard) {
        let captured = Self::default();
        let guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(captured.clone()),
        );
        (captured, guard)
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedErrors {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::ERROR {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.0);
    }
}
