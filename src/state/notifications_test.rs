use super::*;

#[test]
fn publish_assigns_increasing_ids() {
    let mut center = NotificationCenter::default();
    let a = center.publish(NoticeKind::Info, "a", 0);
    let b = center.publish(NoticeKind::Info, "b", 0);
    assert!(b > a);
    assert_eq!(center.visible().count(), 2);
}

#[test]
fn notices_expire_after_ttl() {
    let mut center = NotificationCenter::default();
    center.publish(NoticeKind::Success, "saved", 1_000);
    assert!(!center.expire(1_000 + NOTIFICATION_TTL_MS - 1));
    assert_eq!(center.visible().count(), 1);
    assert!(center.expire(1_000 + NOTIFICATION_TTL_MS));
    assert!(center.is_empty());
}

#[test]
fn oldest_dropped_past_capacity() {
    let mut center = NotificationCenter::default();
    for i in 0..5 {
        center.publish(NoticeKind::Info, format!("n{i}"), 0);
    }
    let messages: Vec<_> = center.visible().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["n2", "n3", "n4"]);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut center = NotificationCenter::default();
    let a = center.publish(NoticeKind::Error, "a", 0);
    center.publish(NoticeKind::Error, "b", 0);
    center.dismiss(a);
    center.dismiss(999);
    let left: Vec<_> = center.visible().map(|n| n.message.clone()).collect();
    assert_eq!(left, ["b"]);
}

#[test]
fn next_deadline_is_earliest() {
    let mut center = NotificationCenter::default();
    assert_eq!(center.next_deadline(), None);
    center.publish(NoticeKind::Info, "a", 10);
    center.publish(NoticeKind::Info, "b", 5);
    assert_eq!(center.next_deadline(), Some(5 + NOTIFICATION_TTL_MS));
}

#[test]
fn notify_through_cell() {
    let cell = std::rc::Rc::new(std::cell::RefCell::new(NotificationCenter::default()));
    notify(&cell, NoticeKind::Warning, "careful");
    let notice = cell.borrow().visible().next().cloned().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.message, "careful");
}

#[test]
fn early_wakeup_keeps_notice_and_reports_remaining_wait() {
    let cell = std::rc::Rc::new(std::cell::RefCell::new(NotificationCenter::default()));
    cell.borrow_mut().publish(NoticeKind::Success, "saved", 1_000);

    assert_eq!(sweep_due(&cell, 1_000 + NOTIFICATION_TTL_MS - 3), Some(3));
    assert_eq!(cell.borrow().visible().count(), 1);

    assert_eq!(sweep_due(&cell, 1_000 + NOTIFICATION_TTL_MS), None);
    assert!(cell.borrow().is_empty());
}

#[test]
fn sweep_on_empty_queue_stops() {
    let cell = std::rc::Rc::new(std::cell::RefCell::new(NotificationCenter::default()));
    assert_eq!(sweep_due(&cell, 5), None);
}
