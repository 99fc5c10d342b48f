use super::*;

#[test]
fn push_assigns_increasing_ids_and_expiry() {
    let mut notes = Notifications::new();
    let a = notes.push(NoticeKind::Success, "uno", 1_000);
    let b = notes.push(NoticeKind::Error, "dos", 1_500);
    assert!(b > a);
    assert_eq!(notes.active()[0].expires_ms, 4_000);
    assert_eq!(notes.latest().map(|n| n.text.as_str()), Some("dos"));
}

#[test]
fn tick_removes_only_expired() {
    let mut notes = Notifications::new();
    notes.push(NoticeKind::Success, "early", 0);
    notes.push(NoticeKind::Success, "late", 2_000);

    assert!(notes.tick(2_999).is_empty());
    let expired = notes.tick(3_000);
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].text, "early");
    assert_eq!(notes.active().len(), 1);

    notes.tick(5_000);
    assert!(notes.active().is_empty());
}

#[test]
fn dismiss_reports_whether_anything_was_removed() {
    let mut notes = Notifications::new();
    let id = notes.push(NoticeKind::Error, "x", 0);
    assert!(notes.dismiss(id));
    assert!(!notes.dismiss(id));
}
