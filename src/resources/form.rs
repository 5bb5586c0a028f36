use bevy::prelude::*;
use std::any::Any;
use std::ops::{Deref, DerefMut};

use crate::components::{Pose, PoseField};
use crate::errors::{FlightError, Result};

/// Text fields mirroring the pose, one per [`PoseField`].
pub trait FormFields: Send + Sync + 'static {
    fn field_text(&self, field: PoseField) -> String;
    fn set_field_text(&mut self, field: PoseField, text: &str);

    fn as_any(&self) -> &dyn Any;

    /// Parses one field as a number.
    fn parse_field(&self, field: PoseField) -> Result<f64> {
        let text = self.field_text(field);
        text.trim().parse::<f64>().map_err(|_| FlightError::Parse { field, text })
    }

    /// Overwrites every field from `pose`.
    fn mirror(&mut self, pose: &Pose) {
        for field in PoseField::ALL {
            self.set_field_text(field, &pose.field(field).to_string());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextForm {
    fields: [String; 6],
}

impl TextForm {
    pub fn from_pose(pose: &Pose) -> Self {
        let mut form = Self::default();
        form.mirror(pose);
        form
    }
}

impl FormFields for TextForm {
    fn field_text(&self, field: PoseField) -> String {
        self.fields[field.index()].clone()
    }

    fn set_field_text(&mut self, field: PoseField, text: &str) {
        self.fields[field.index()] = text.to_string();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Resource holding the attached form.
#[derive(Resource)]
pub struct FormLink {
    form: Box<dyn FormFields>,
}

impl FormLink {
    pub fn new<F: FormFields>(form: F) -> Self {
        Self {
            form: Box::new(form),
        }
    }

    pub fn downcast_ref<F: FormFields>(&self) -> Option<&F> {
        self.form.as_any().downcast_ref::<F>()
    }
}

impl Default for FormLink {
    fn default() -> Self {
        Self::new(TextForm::default())
    }
}

impl Deref for FormLink {
    type Target = dyn FormFields;

    fn deref(&self) -> &Self::Target {
        self.form.as_ref()
    }
}

impl DerefMut for FormLink {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.form.as_mut()
    }
}
