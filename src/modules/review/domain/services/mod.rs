pub mod moderation_policy;

pub use moderation_policy::ModerationPolicy;
