use super::*;

#[test]
fn with_form_writes_through_the_signal() {
    let form = FormSignal::new();
    assert_eq!(form.with_form(|f| f.add_participant("ana@co.com")), Some(true));
    assert_eq!(form.signal().with_untracked(|f| f.participants().len()), 1);
}

#[test]
fn apply_and_read_share_state() {
    let form = FormSignal::new();
    form.apply(|f| f.set_host_email("host@co.com"));
    assert_eq!(form.read(|f| f.host_email().to_owned()), "host@co.com");
}

#[test]
fn with_form_on_disposed_signal_does_not_run() {
    let form = FormSignal::new();
    form.signal().dispose();
    let mut ran = false;
    assert!(form.with_form(|_| ran = true).is_none());
    assert!(!ran);
}
