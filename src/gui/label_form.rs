use eframe::egui;

use crate::core::{
    binder::{
        bind_record,
        ChoiceControl,
        FieldKind,
        FieldValue,
        FlagControl,
        FormControls,
        LABEL_FIELDS,
    },
    models::{
        Thumbnail,
        FACE_OPTIONS,
    },
};

/// The label controls for one record: a checkbox per boolean field and
/// the faces dropdown, laid out in field order. Implements FormControls
/// so the session controller can read and write it without knowing
/// anything about egui.
pub struct LabelForm {
    flags: Vec<(&'static str, FlagControl)>,
    faces: ChoiceControl,
}

impl LabelForm {
    pub fn new() -> Self {
        let flags = LABEL_FIELDS
            .iter()
            .filter(|(_, kind)| *kind == FieldKind::Flag)
            .map(|(name, _)| (*name, FlagControl::default()))
            .collect();

        Self { flags, faces: ChoiceControl::new(FACE_OPTIONS) }
    }

    /// Render a fetched record into the controls.
    pub fn load(&mut self, record: &Thumbnail) {
        bind_record(record, self);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        for (name, control) in &mut self.flags {
            ui.checkbox(&mut control.checked, *name);
        }

        ui.horizontal(|ui| {
            ui.label("faces");

            let options = self.faces.options.clone();
            egui::ComboBox::from_id_salt("faces_label")
                .selected_text(self.faces.value().to_string())
                .show_ui(ui, |ui| {
                    for (index, option) in options.iter().enumerate() {
                        ui.selectable_value(&mut self.faces.selected, index, option.clone());
                    }
                });
        });
    }
}

impl FormControls for LabelForm {
    fn read_field(&self, name: &str) -> Option<FieldValue> {
        if name == "faces" {
            return Some(FieldValue::Choice(self.faces.value().to_string()));
        }

        self.flags
            .iter()
            .find(|(flag_name, _)| *flag_name == name)
            .map(|(_, control)| FieldValue::Flag(control.checked))
    }

    fn write_field(&mut self, name: &str, value: FieldValue) {
        match value {
            FieldValue::Flag(flag) => {
                if let Some((_, control)) =
                    self.flags.iter_mut().find(|(flag_name, _)| *flag_name == name)
                {
                    control.checked = flag;
                }
            }
            FieldValue::Choice(choice) => {
                if name == "faces" {
                    self.faces.select_value(&choice);
                }
            }
        }
    }
}

impl Default for LabelForm {
    fn default() -> Self {
        Self::new()
    }
}
