pub mod fields;
pub mod loaders;
pub mod record;
pub mod us_state;

pub use fields::{ErrorRecord, Field};
pub use loaders::{load_all_toml_files, load_toml_to_record};
pub use record::{EmailPayload, SubmissionRecord};
pub use us_state::UsState;
