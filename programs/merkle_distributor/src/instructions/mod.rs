pub mod create_window;
pub mod claim;
pub mod withdraw_window;
pub mod close_claim_status;

pub use create_window::*;
pub use claim::*;
pub use withdraw_window::*;
pub use close_claim_status::*;
