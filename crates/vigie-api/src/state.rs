use std::sync::Arc;

use jiff::Zoned;
use jiff::civil::Date;
use vigie_engine::Engine;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    /// Pinned evaluation date. `None` means today in the system time zone.
    pub reference_date: Option<Date>,
}

impl AppState {
    pub fn new(engine: Engine, reference_date: Option<Date>) -> Self {
        Self {
            engine: Arc::new(engine),
            reference_date,
        }
    }

    /// Date used to turn quit dates into years since quitting.
    pub fn as_of(&self) -> Date {
        self.reference_date.unwrap_or_else(|| Zoned::now().date())
    }
}
