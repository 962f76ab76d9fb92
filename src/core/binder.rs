use crate::core::models::Thumbnail;

/// What a single labeling control can hold: a checkbox state or one entry
/// out of a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Flag(bool),
    Choice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Flag,
    Choice,
}

/// The label fields of a record, in the order the form lays them out.
/// `faces` is the single categorical field.
pub const LABEL_FIELDS: &[(&str, FieldKind)] = &[
    ("question", FieldKind::Flag),
    ("text", FieldKind::Flag),
    ("conflict", FieldKind::Flag),
    ("arrows", FieldKind::Flag),
    ("monochrony", FieldKind::Flag),
    ("juxtaposition", FieldKind::Flag),
    ("cliffhanger", FieldKind::Flag),
    ("faces", FieldKind::Choice),
];

/// Seam between the session controller and whatever toolkit renders the
/// controls. The controller only ever reads and writes named fields, so
/// swapping the GUI out does not touch navigation logic.
pub trait FormControls {
    fn read_field(&self, name: &str) -> Option<FieldValue>;
    fn write_field(&mut self, name: &str, value: FieldValue);
}

/// Checkbox-backed control.
#[derive(Debug, Default, Clone)]
pub struct FlagControl {
    pub checked: bool,
}

/// Dropdown-backed control over a fixed, non-empty option list.
#[derive(Debug, Clone)]
pub struct ChoiceControl {
    pub options: Vec<String>,
    pub selected: usize,
}

impl ChoiceControl {
    pub fn new(options: &[&str]) -> Self {
        assert!(!options.is_empty(), "a choice control needs at least one option");
        Self { options: options.iter().map(|option| option.to_string()).collect(), selected: 0 }
    }

    pub fn value(&self) -> &str {
        &self.options[self.selected]
    }

    /// Select the option matching `value`. Unknown values fall back to the
    /// first option, so a record the store half-filled still renders.
    pub fn select_value(&mut self, value: &str) {
        match self.options.iter().position(|option| option == value) {
            Some(index) => self.selected = index,
            None => {
                eprintln!(
                    "[Form] Invalid value {:?}, setting to {:?}",
                    value, self.options[0]
                );
                self.selected = 0;
            }
        }
    }
}

/// Push every label field of `record` into the form controls.
pub fn bind_record(record: &Thumbnail, form: &mut impl FormControls) {
    for (name, _) in LABEL_FIELDS {
        if let Some(value) = label_value(record, name) {
            form.write_field(name, value);
        }
    }
}

/// Pull the edited controls back into `record`. Only label fields are
/// written; url, title, id and the reviewed flag stay as they were.
pub fn collect_record(form: &impl FormControls, record: &mut Thumbnail) {
    for (name, _) in LABEL_FIELDS {
        if let Some(value) = form.read_field(name) {
            set_label_value(record, name, value);
        }
    }
}

fn label_value(record: &Thumbnail, name: &str) -> Option<FieldValue> {
    let value = match name {
        "question" => FieldValue::Flag(record.question),
        "text" => FieldValue::Flag(record.text),
        "conflict" => FieldValue::Flag(record.conflict),
        "arrows" => FieldValue::Flag(record.arrows),
        "monochrony" => FieldValue::Flag(record.monochrony),
        "juxtaposition" => FieldValue::Flag(record.juxtaposition),
        "cliffhanger" => FieldValue::Flag(record.cliffhanger),
        "faces" => FieldValue::Choice(record.faces.clone()),
        _ => return None,
    };

    Some(value)
}

fn set_label_value(record: &mut Thumbnail, name: &str, value: FieldValue) {
    match (name, value) {
        ("question", FieldValue::Flag(flag)) => record.question = flag,
        ("text", FieldValue::Flag(flag)) => record.text = flag,
        ("conflict", FieldValue::Flag(flag)) => record.conflict = flag,
        ("arrows", FieldValue::Flag(flag)) => record.arrows = flag,
        ("monochrony", FieldValue::Flag(flag)) => record.monochrony = flag,
        ("juxtaposition", FieldValue::Flag(flag)) => record.juxtaposition = flag,
        ("cliffhanger", FieldValue::Flag(flag)) => record.cliffhanger = flag,
        ("faces", FieldValue::Choice(choice)) => record.faces = choice,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::models::FACE_OPTIONS;

    #[derive(Default)]
    struct MapForm {
        fields: HashMap<String, FieldValue>,
    }

    impl FormControls for MapForm {
        fn read_field(&self, name: &str) -> Option<FieldValue> {
            self.fields.get(name).cloned()
        }

        fn write_field(&mut self, name: &str, value: FieldValue) {
            self.fields.insert(name.to_string(), value);
        }
    }

    fn labeled_record() -> Thumbnail {
        Thumbnail {
            url: "https://img.example.com/a/default.jpg".to_string(),
            title: "A".to_string(),
            id: "a".to_string(),
            question: true,
            text: false,
            conflict: true,
            faces: "sad".to_string(),
            arrows: false,
            monochrony: true,
            juxtaposition: false,
            cliffhanger: true,
            reviewed: false,
        }
    }

    fn blank_record() -> Thumbnail {
        Thumbnail {
            url: "https://img.example.com/b/default.jpg".to_string(),
            title: "B".to_string(),
            id: "b".to_string(),
            question: false,
            text: false,
            conflict: false,
            faces: "none".to_string(),
            arrows: false,
            monochrony: false,
            juxtaposition: false,
            cliffhanger: false,
            reviewed: true,
        }
    }

    #[test]
    fn bind_then_collect_preserves_labels() {
        let source = labeled_record();
        let mut form = MapForm::default();
        bind_record(&source, &mut form);

        let mut target = blank_record();
        collect_record(&form, &mut target);

        assert_eq!(target.question, source.question);
        assert_eq!(target.text, source.text);
        assert_eq!(target.conflict, source.conflict);
        assert_eq!(target.arrows, source.arrows);
        assert_eq!(target.monochrony, source.monochrony);
        assert_eq!(target.juxtaposition, source.juxtaposition);
        assert_eq!(target.cliffhanger, source.cliffhanger);
        assert_eq!(target.faces, source.faces);
    }

    #[test]
    fn collect_leaves_non_label_fields_alone() {
        let mut form = MapForm::default();
        bind_record(&labeled_record(), &mut form);

        let mut target = blank_record();
        collect_record(&form, &mut target);

        assert_eq!(target.url, "https://img.example.com/b/default.jpg");
        assert_eq!(target.title, "B");
        assert_eq!(target.id, "b");
        assert!(target.reviewed);
    }

    #[test]
    fn label_fields_match_the_form_layout() {
        assert_eq!(LABEL_FIELDS.len(), 8);

        let choices: Vec<_> =
            LABEL_FIELDS.iter().filter(|(_, kind)| *kind == FieldKind::Choice).collect();
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].0, "faces");
    }

    #[test]
    fn choice_control_selects_matching_option() {
        let mut control = ChoiceControl::new(FACE_OPTIONS);
        control.select_value("sad");
        assert_eq!(control.value(), "sad");
    }

    #[test]
    fn choice_control_falls_back_to_first_option() {
        let mut control = ChoiceControl::new(FACE_OPTIONS);
        control.select_value("sad");
        control.select_value("grimace");
        assert_eq!(control.selected, 0);
        assert_eq!(control.value(), "none");
    }

    #[test]
    fn every_face_option_round_trips() {
        let mut record = labeled_record();
        let mut form = MapForm::default();

        for option in FACE_OPTIONS {
            record.faces = option.to_string();
            bind_record(&record, &mut form);

            let mut target = blank_record();
            collect_record(&form, &mut target);
            assert_eq!(target.faces, *option);
        }
    }
}
