use crate::core::{
    binder::{
        collect_record,
        FormControls,
    },
    models::Thumbnail,
    ThumblabError,
};

/// A record currently held by the session, tagged with the dataset index
/// it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecord {
    pub index: usize,
    pub record: Thumbnail,
}

/// Everything one navigation asks the transport to do: write the outgoing
/// record back (if a record was loaded), then fetch the target index.
/// Building a plan performs no I/O, so the ordering rules live here and
/// can be tested without a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub seq: u64,
    pub save: Option<LoadedRecord>,
    pub target: usize,
}

/// State for the labeling workflow: which record is on screen and how far
/// the index space goes. Each navigation gets a monotonically increasing
/// sequence number so completions of superseded navigations can be
/// recognized and dropped.
pub struct Session {
    dataset_size: usize,
    current: Option<LoadedRecord>,
    seq: u64,
}

impl Session {
    pub fn new(dataset_size: usize) -> Self {
        Self { dataset_size, current: None, seq: 0 }
    }

    pub fn dataset_size(&self) -> usize {
        self.dataset_size
    }

    pub fn set_dataset_size(&mut self, dataset_size: usize) {
        self.dataset_size = dataset_size;
    }

    pub fn current(&self) -> Option<&LoadedRecord> {
        self.current.as_ref()
    }

    /// Start a navigation to `target`. The edited form is folded into the
    /// current record, the record is marked reviewed and handed off for
    /// writing, and the target index becomes the fetch destination.
    ///
    /// Targets past the end of the dataset are rejected here without
    /// touching the loaded record. The upper bound is inclusive: the
    /// dataset size is treated as the last valid index, matching the
    /// store's own indexing.
    pub fn begin_navigation(
        &mut self,
        target: usize,
        form: &impl FormControls,
    ) -> Result<Navigation, ThumblabError> {
        if target > self.dataset_size {
            return Err(ThumblabError::OutOfBounds { index: target, size: self.dataset_size });
        }

        let save = self.current.take().map(|mut outgoing| {
            collect_record(form, &mut outgoing.record);
            outgoing.record.reviewed = true;
            outgoing
        });

        self.seq += 1;

        Ok(Navigation { seq: self.seq, save, target })
    }

    /// Install a fetched record. Returns false when a newer navigation
    /// started while this one was in flight; the stale record is dropped
    /// so the screen never jumps backwards.
    pub fn apply_fetched(&mut self, seq: u64, loaded: LoadedRecord) -> bool {
        if seq != self.seq {
            println!("[Session] Discarding stale fetch for index {}", loaded.index);
            return false;
        }

        self.current = Some(loaded);
        true
    }

    /// A fetch failed. The slot stays empty because the outgoing record
    /// was already dispatched to the store with its navigation. Returns
    /// false when the failure belongs to a superseded navigation.
    pub fn fetch_failed(&mut self, seq: u64) -> bool {
        seq == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::binder::{
        bind_record,
        FieldValue,
        FormControls,
    };

    /// Form double standing in for a user who ticked every checkbox and
    /// picked a face, so collected records are visibly different from the
    /// all-false fixtures.
    struct EditedForm;

    impl FormControls for EditedForm {
        fn read_field(&self, name: &str) -> Option<FieldValue> {
            if name == "faces" {
                Some(FieldValue::Choice("angry".to_string()))
            } else {
                Some(FieldValue::Flag(true))
            }
        }

        fn write_field(&mut self, _name: &str, _value: FieldValue) {}
    }

    /// Form double that records nothing and returns nothing, for tests
    /// where the form content is irrelevant.
    struct NullForm;

    impl FormControls for NullForm {
        fn read_field(&self, _name: &str) -> Option<FieldValue> {
            None
        }

        fn write_field(&mut self, _name: &str, _value: FieldValue) {}
    }

    fn record(id: &str) -> Thumbnail {
        Thumbnail {
            url: format!("https://img.example.com/{id}/default.jpg"),
            title: id.to_uppercase(),
            id: id.to_string(),
            question: false,
            text: false,
            conflict: false,
            faces: "none".to_string(),
            arrows: false,
            monochrony: false,
            juxtaposition: false,
            cliffhanger: false,
            reviewed: false,
        }
    }

    #[test]
    fn first_navigation_has_nothing_to_save() {
        let mut session = Session::new(299);

        let plan = session.begin_navigation(0, &NullForm).unwrap();

        assert_eq!(plan.target, 0);
        assert!(plan.save.is_none());
    }

    #[test]
    fn navigation_saves_current_record_before_fetching() {
        let mut session = Session::new(299);

        let plan = session.begin_navigation(4, &NullForm).unwrap();
        assert!(session.apply_fetched(plan.seq, LoadedRecord { index: 4, record: record("a") }));

        let plan = session.begin_navigation(5, &EditedForm).unwrap();
        let outgoing = plan.save.expect("a loaded record must be written back");

        assert_eq!(outgoing.index, 4);
        assert_eq!(plan.target, 5);
        assert!(outgoing.record.question);
        assert!(outgoing.record.cliffhanger);
        assert_eq!(outgoing.record.faces, "angry");
    }

    #[test]
    fn navigation_marks_the_outgoing_record_reviewed() {
        let mut session = Session::new(299);

        let plan = session.begin_navigation(0, &NullForm).unwrap();
        assert!(session.apply_fetched(plan.seq, LoadedRecord { index: 0, record: record("a") }));
        assert!(!session.current().unwrap().record.reviewed);

        let plan = session.begin_navigation(1, &NullForm).unwrap();
        assert!(plan.save.unwrap().record.reviewed);
    }

    #[test]
    fn out_of_bounds_target_is_rejected_without_side_effects() {
        let mut session = Session::new(299);

        let plan = session.begin_navigation(7, &NullForm).unwrap();
        assert!(session.apply_fetched(plan.seq, LoadedRecord { index: 7, record: record("a") }));

        let error = session.begin_navigation(300, &EditedForm).unwrap_err();
        assert_eq!(error, ThumblabError::OutOfBounds { index: 300, size: 299 });

        // The loaded record is untouched and no write was queued.
        let current = session.current().unwrap();
        assert_eq!(current.index, 7);
        assert!(!current.record.question);
        assert!(!current.record.reviewed);
    }

    #[test]
    fn target_equal_to_dataset_size_is_accepted() {
        let mut session = Session::new(299);
        let plan = session.begin_navigation(299, &NullForm).unwrap();
        assert_eq!(plan.target, 299);
    }

    #[test]
    fn stale_fetch_is_discarded() {
        let mut session = Session::new(299);

        let slow = session.begin_navigation(1, &NullForm).unwrap();
        let fast = session.begin_navigation(2, &NullForm).unwrap();

        // The fast navigation's record lands first; the slow one must not
        // overwrite it afterwards.
        assert!(session.apply_fetched(fast.seq, LoadedRecord { index: 2, record: record("b") }));
        assert!(!session.apply_fetched(slow.seq, LoadedRecord { index: 1, record: record("a") }));

        assert_eq!(session.current().unwrap().index, 2);
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut session = Session::new(299);

        let slow = session.begin_navigation(1, &NullForm).unwrap();
        let fast = session.begin_navigation(2, &NullForm).unwrap();

        assert!(session.apply_fetched(fast.seq, LoadedRecord { index: 2, record: record("b") }));
        assert!(!session.fetch_failed(slow.seq));
        assert_eq!(session.current().unwrap().index, 2);
    }

    #[test]
    fn failed_fetch_leaves_the_slot_empty() {
        let mut session = Session::new(299);

        let plan = session.begin_navigation(0, &NullForm).unwrap();
        assert!(session.apply_fetched(plan.seq, LoadedRecord { index: 0, record: record("a") }));

        let plan = session.begin_navigation(1, &NullForm).unwrap();
        assert!(session.fetch_failed(plan.seq));

        // The outgoing record went to the store with the navigation; there
        // is nothing left to edit until the next successful fetch.
        assert!(session.current().is_none());
    }

    #[test]
    fn jump_then_step_matches_the_labeling_flow() {
        let mut session = Session::new(299);

        // Jumping from a fresh session writes nothing.
        let plan = session.begin_navigation(5, &NullForm).unwrap();
        assert!(plan.save.is_none());
        assert_eq!(plan.target, 5);

        let mut fetched = record("five");
        fetched.question = true;
        fetched.faces = "happy".to_string();
        assert!(session
            .apply_fetched(plan.seq, LoadedRecord { index: 5, record: fetched.clone() }));

        // Render the record into a form, then step to the next index using
        // that same form. The written record must carry the same labels
        // plus the reviewed mark; everything else passes through.
        let mut form = PassthroughForm::default();
        bind_record(&session.current().unwrap().record, &mut form);

        let plan = session.begin_navigation(6, &form).unwrap();
        let written = plan.save.unwrap();

        assert_eq!(written.index, 5);
        assert_eq!(plan.target, 6);
        assert!(written.record.question);
        assert_eq!(written.record.faces, "happy");
        assert!(written.record.reviewed);
        assert_eq!(written.record.url, fetched.url);
        assert_eq!(written.record.title, fetched.title);
        assert_eq!(written.record.id, fetched.id);
    }

    #[derive(Default)]
    struct PassthroughForm {
        fields: std::collections::HashMap<String, FieldValue>,
    }

    impl FormControls for PassthroughForm {
        fn read_field(&self, name: &str) -> Option<FieldValue> {
            self.fields.get(name).cloned()
        }

        fn write_field(&mut self, name: &str, value: FieldValue) {
            self.fields.insert(name.to_string(), value);
        }
    }
}
