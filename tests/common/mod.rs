mod assertions;

// Re-export
pub use assertions::{assert_finite_pose, assert_pose_eq};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
