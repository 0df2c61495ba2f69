pub mod activity_log;
pub mod common_enums;
pub mod identifiable;
pub mod invoice;
pub mod payment;
pub mod record;

// Re-exports
pub use activity_log::*;
pub use common_enums::*;
pub use identifiable::*;
pub use invoice::*;
pub use payment::*;
pub use record::*;
