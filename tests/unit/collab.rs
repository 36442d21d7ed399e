use super::*;

struct Failing;

impl FeedbackSink for Failing {
    fn submit(&self, _record: &FeedbackRecord) -> anyhow::Result<()> {
        anyhow::bail!("endpoint unreachable")
    }
}

fn record() -> FeedbackRecord {
    serde_json::from_value(serde_json::json!({
        "id": "fb-1",
        "type": "feedback",
        "text": "love it",
        "email": "a@b.c",
        "timestamp": "2026-01-01T00:00:00Z",
        "language": "en",
        "userAgent": "cli",
        "rating": 5
    }))
    .unwrap()
}

#[test]
fn feedback_record_keeps_flat_extras() {
    let r = record();
    assert_eq!(r.kind, "feedback");
    assert_eq!(r.user_agent, "cli");
    assert_eq!(r.extra.get("rating"), Some(&serde_json::json!(5)));

    let back = serde_json::to_value(&r).unwrap();
    assert_eq!(back["rating"], 5);
    assert_eq!(back["type"], "feedback");
}

#[test]
fn feedback_failures_do_not_propagate() {
    assert!(!submit_feedback(&Failing, &record()));
}

#[test]
fn labels_default_and_partial_override() {
    let l: Labels = serde_json::from_str(r#"{"image_prefix":"Bild"}"#).unwrap();
    assert_eq!(l.image_prefix, "Bild");
    assert_eq!(l.archive_prefix, "advertisement_images");
}
