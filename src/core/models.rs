use serde::{
    Deserialize,
    Serialize,
};

/// Values the faces dropdown offers. The store may hold anything for an
/// unreviewed record, so the first entry doubles as the fallback shown
/// when nothing matches.
pub const FACE_OPTIONS: &[&str] = &["none", "happy", "sad", "angry", "surprised", "scared"];

/// One dataset entry, in exactly the shape the record store serves and
/// accepts at `items/{index}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,   // Image location, loaded straight into the viewer
    pub title: String, // Video title, display only
    pub id: String,    // Upstream video id, passed through untouched
    pub question: bool,
    pub text: bool,
    pub conflict: bool,
    pub faces: String, // One of FACE_OPTIONS once a human has labeled it
    pub arrows: bool,
    pub monochrony: bool,
    pub juxtaposition: bool,
    pub cliffhanger: bool,
    pub reviewed: bool, // Set on every save, never cleared from the client
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "url": "https://img.example.com/vid123/default.jpg",
            "title": "I Tested Every Thumbnail Style",
            "id": "vid123",
            "question": true,
            "text": false,
            "conflict": false,
            "faces": "happy",
            "arrows": true,
            "monochrony": false,
            "juxtaposition": false,
            "cliffhanger": true,
            "reviewed": false
        }"#
    }

    #[test]
    fn deserializes_store_payload() {
        let record: Thumbnail = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(record.url, "https://img.example.com/vid123/default.jpg");
        assert_eq!(record.title, "I Tested Every Thumbnail Style");
        assert_eq!(record.id, "vid123");
        assert!(record.question);
        assert!(!record.text);
        assert_eq!(record.faces, "happy");
        assert!(record.arrows);
        assert!(record.cliffhanger);
        assert!(!record.reviewed);
    }

    #[test]
    fn rejects_payload_with_missing_label() {
        let truncated = r#"{"url": "x", "title": "t", "id": "a"}"#;
        assert!(serde_json::from_str::<Thumbnail>(truncated).is_err());
    }

    #[test]
    fn serializes_every_store_field() {
        let record: Thumbnail = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "url",
            "title",
            "id",
            "question",
            "text",
            "conflict",
            "faces",
            "arrows",
            "monochrony",
            "juxtaposition",
            "cliffhanger",
            "reviewed",
        ] {
            assert!(object.contains_key(key), "missing field {key}");
        }
        assert_eq!(object.len(), 12);
    }

    #[test]
    fn face_options_start_with_the_fallback() {
        assert_eq!(FACE_OPTIONS[0], "none");
    }
}
