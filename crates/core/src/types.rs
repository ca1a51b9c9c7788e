/// Deployment version sequence within an app + cluster pair.
pub type Sequence = i64;
