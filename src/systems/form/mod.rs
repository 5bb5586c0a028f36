use bevy::prelude::*;

use crate::{
    components::{Pose, PoseField, Vehicle},
    errors::FlightError,
    plugins::{FlightErrorEvent, FormEditEvent},
    resources::{FormFields, FormLink, SceneHost, SceneLink},
};

/// Reads every form field, returning the edited pose and the fields that failed to parse.
pub fn read_form(form: &dyn FormFields, current: &Pose) -> (Pose, Vec<FlightError>) {
    let mut edited = *current;
    let mut errors = Vec::new();
    for field in PoseField::ALL {
        match form.parse_field(field) {
            Ok(value) => edited.set_field(field, value),
            Err(e) => errors.push(e),
        }
    }
    (edited, errors)
}

/// Handles text edits and applies the form to the pose on request.
///
/// Fields that do not parse keep their pose value and are reported; the rest are applied.
pub fn form_edit_system(
    mut edits: EventReader<FormEditEvent>,
    mut form: ResMut<FormLink>,
    mut vehicle: Query<&mut Pose, With<Vehicle>>,
    mut scene: ResMut<SceneLink>,
    mut faults: EventWriter<FlightErrorEvent>,
) {
    for edit in edits.read() {
        match edit {
            FormEditEvent::Set { field, text } => form.set_field_text(*field, text),
            FormEditEvent::Apply => {
                let Ok(mut pose) = vehicle.get_single_mut() else {
                    continue;
                };
                let (edited, errors) = read_form(&**form, &pose);
                for error in errors {
                    faults.send(FlightErrorEvent(error));
                }
                if pose.set_if_neq(edited) {
                    scene.set_vehicle_pose(&pose);
                }
            }
        }
    }
}

/// Mirrors the pose into the form whenever it changes.
pub fn mirror_form_system(
    vehicle: Query<&Pose, (With<Vehicle>, Changed<Pose>)>,
    mut form: ResMut<FormLink>,
) {
    if let Ok(pose) = vehicle.get_single() {
        form.mirror(pose);
    }
}
