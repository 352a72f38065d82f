pub mod activity;
pub mod record;

pub use activity::ActivityKind;
pub use record::PromptRecord;
