// Host-side tests for the transient notice timeline.

use six_seven::core::*;

#[test]
fn timeline_is_show_hide_remove() {
    assert_eq!(
        Notice::timeline(),
        [
            (10, NoticeStep::Show),
            (1600, NoticeStep::Hide),
            (2000, NoticeStep::Remove),
        ]
    );
}

#[test]
fn timeline_ends_with_removal() {
    let steps = Notice::timeline();
    assert!(steps.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(steps.last(), Some(&(2000, NoticeStep::Remove)));
}

#[test]
fn default_notice_says_nice() {
    assert_eq!(Notice::default().text, "Nice.");
}
