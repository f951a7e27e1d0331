//! Post-release motion: momentum decay and snap tweens

pub mod momentum;
pub mod snap;

pub use momentum::{MomentumAnimator, StepOutcome};
pub use snap::SnapAnimator;
