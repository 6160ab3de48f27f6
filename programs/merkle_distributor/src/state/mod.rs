pub mod registry_state;
pub mod window_state;
pub mod claim_state;

pub use registry_state::*;
pub use window_state::*;
pub use claim_state::*;
