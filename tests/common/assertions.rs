use approx::assert_relative_eq;
use dronecam::components::Pose;

/// Assert that every pose field is finite
#[track_caller]
pub fn assert_finite_pose(pose: &Pose) {
    assert!(pose.longitude.is_finite(), "Longitude is not finite");
    assert!(pose.latitude.is_finite(), "Latitude is not finite");
    assert!(pose.altitude.is_finite(), "Altitude is not finite");
    assert!(pose.heading.is_finite(), "Heading is not finite");
    assert!(pose.pitch.is_finite(), "Pitch is not finite");
    assert!(pose.roll.is_finite(), "Roll is not finite");
}

/// Assert that two poses are approximately equal
#[track_caller]
pub fn assert_pose_eq(actual: &Pose, expected: &Pose, epsilon: f64) {
    assert_relative_eq!(actual.longitude, expected.longitude, epsilon = epsilon);
    assert_relative_eq!(actual.latitude, expected.latitude, epsilon = epsilon);
    assert_relative_eq!(actual.altitude, expected.altitude, epsilon = epsilon);
    assert_relative_eq!(actual.heading, expected.heading, epsilon = epsilon);
    assert_relative_eq!(actual.pitch, expected.pitch, epsilon = epsilon);
    assert_relative_eq!(actual.roll, expected.roll, epsilon = epsilon);
}
