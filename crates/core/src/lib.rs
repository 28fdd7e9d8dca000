pub mod error;
pub mod event;
pub mod history;
pub mod reading;
pub mod snapshot;
pub mod state;
pub mod trend;

pub use error::{FloeError, Result};
pub use event::Message;
pub use history::HistoryBuffer;
pub use reading::Reading;
pub use snapshot::{Snapshot, TableRow, TableView};
pub use state::AppState;
pub use trend::TrendLine;
