// Modules under core, split into files for convenience
mod event;
mod field;
mod header;
mod history;
mod input;
mod schema;

// Re-exports of the key public data structures
pub use event::{BankDirection, Event, EventKind};
pub use field::{EventField, SummaryField, END_OF_HISTORY, FIRST_EVENT_CODE};
pub use header::Header;
pub use history::History;
pub use input::{InputFormat, Keyword};
pub use schema::{Category, EventFormat};
