pub mod review_status;
pub mod voter_set;

pub use review_status::ReviewStatus;
pub use voter_set::{ReportLog, VoterSet};
