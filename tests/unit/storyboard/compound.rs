use super::*;

fn written(node: &Node, level: usize, ds: i32, de: i32) -> String {
    let mut out = Vec::new();
    node.write(&mut out, level, TimeMs(ds), TimeMs(de)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn min_and_max_ignore_unset_and_order() {
    let mut l = Loop::new(0, 1);
    l.fade(Timing::span(300, 400), 1.0, None)
        .fade(Timing::auto(), 1.0, None)
        .fade(Timing::starting(-50), 1.0, None)
        .fade(Timing::until(900), 1.0, None)
        .fade(Timing::span(100, 200), 1.0, None);
    assert_eq!(l.min_start().unwrap(), TimeMs(-50));
    assert_eq!(l.max_end().unwrap(), TimeMs(900));
}

#[test]
fn missing_candidates_fail_with_missing_timing() {
    let mut l = Loop::new(0, 1);
    assert!(matches!(
        l.min_start().unwrap_err(),
        OsbError::MissingRequiredTiming(_)
    ));

    l.fade(Timing::until(100), 1.0, None);
    let err = l.min_start().unwrap_err();
    assert!(err.to_string().contains("start"));
    assert_eq!(l.max_end().unwrap(), TimeMs(100));

    let mut t = Trigger::new(TriggerType::Passing, 0, 10);
    t.fade(Timing::starting(0), 1.0, None);
    let err = t.max_end().unwrap_err();
    assert!(matches!(err, OsbError::MissingRequiredTiming(_)));
    assert!(err.to_string().contains("trigger"));
}

#[test]
fn loop_end_is_start_plus_count_iterations() {
    let mut l = Loop::new(1000, 3);
    l.move_y(Timing::until(500), 0.0, 10.0);
    assert_eq!(l.end().unwrap(), TimeMs(2500));
}

#[test]
fn loop_end_tracks_later_children() {
    let mut l = Loop::new(1000, 2);
    l.fade(Timing::span(0, 100), 0.0, 1.0);
    assert_eq!(l.end().unwrap(), TimeMs(1200));
    l.fade(Timing::span(100, 400), 1.0, 0.0);
    assert_eq!(l.end().unwrap(), TimeMs(1800));
}

#[test]
fn empty_loop_has_no_end() {
    let l = Loop::new(1000, 3);
    assert!(matches!(
        l.end().unwrap_err(),
        OsbError::MissingRequiredTiming(_)
    ));
    let node = Node::Loop(l);
    assert_eq!(node.start(), Some(TimeMs(1000)));
    assert!(node.end().is_err());
}

#[test]
fn loop_writes_header_and_children_with_local_window() {
    let mut l = Loop::new(7705, 16);
    l.move_y(Timing::span(0, 520), -32.0, 480.0)
        .fade(Timing::auto(), 0.8, None);
    let text = written(&Node::Loop(l), 1, 0, 0);
    assert_eq!(
        text,
        " L,7705,16\n  MY,0,0,520,-32,480\n  F,0,0,520,0.8,0.8\n"
    );
}

#[test]
fn trigger_children_use_their_own_window() {
    let mut t = Trigger::new(TriggerType::Failing, 0, 60000);
    t.fade(Timing::span(200, 300), 1.0, 0.0)
        .scale(Timing::auto(), 2.0, None);
    let text = written(&Node::Trigger(t), 1, 5, 6);
    assert_eq!(
        text,
        " T,Failing,0,60000\n  F,0,200,300,1,0\n  S,0,200,300,2,2\n"
    );
}

#[test]
fn leaf_node_uses_inherited_window() {
    let node = Node::Command(Command::rotate(Timing::auto(), 0.5, None));
    assert_eq!(written(&node, 2, 40, 80), "  R,0,40,80,0.5,0.5\n");
}

#[test]
fn container_error_aborts_after_header() {
    let mut l = Loop::new(0, 2);
    l.fade(Timing::auto(), 1.0, None);
    let mut out = Vec::new();
    let err = Node::Loop(l)
        .write(&mut out, 1, TimeMs::ZERO, TimeMs::ZERO)
        .unwrap_err();
    assert!(matches!(err, OsbError::MissingRequiredTiming(_)));
    assert_eq!(String::from_utf8(out).unwrap(), " L,0,2\n");
}
