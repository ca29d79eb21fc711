pub mod config;
pub mod error;
pub mod payload;
pub mod provider;
pub mod raw;
pub mod tabular;

pub use config::{MatrixConfig, load_config};
pub use error::{FetchError, IngestError, Result};
pub use payload::{GroupedRecords, RawPayload};
pub use provider::{DataProvider, JsonFileProvider, StaticProvider, load_store};
pub use raw::RawRecord;
pub use tabular::{FieldMapping, is_tabular_response, reshape_tabular};
