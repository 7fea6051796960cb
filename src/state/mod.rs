pub mod debounce;
pub mod input;
pub mod list;
pub mod suggest;

pub use debounce::Debouncer;
pub use input::InputTracker;
pub use list::ListState;
pub use suggest::SuggestionMode;
