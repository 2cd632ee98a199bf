pub mod form_state;
pub mod submit_ctx;
pub mod submit_flow;

pub use form_state::FormState;
pub use submit_ctx::SubmitCtx;
pub use submit_flow::{SubmitFlow, SubmitOutcome};
