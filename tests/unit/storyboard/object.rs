use super::*;
use crate::foundation::error::OsbError;
use crate::storyboard::command::Timing;

fn written(obj: &StoryObject) -> String {
    let mut out = Vec::new();
    obj.write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn sprite_header_packs_layer_origin_file_position() {
    let mut obj = StoryObject::sprite(Layer::Background, Origin::TopLeft, "a.png", 0.0, 0.0);
    obj.fade(Timing::span(0, 1000), 0.0, 1.0);
    assert_eq!(written(&obj), "Sprite,0,0,a.png,0,0\n F,0,0,1000,0,1\n");
}

#[test]
fn file_names_with_spaces_are_quoted() {
    let mut obj =
        StoryObject::sprite(Layer::Overlay, Origin::Centre, "sb/my file.png", 320.0, 240.5);
    obj.fade(Timing::span(0, 1), 1.0, None);
    let text = written(&obj);
    assert!(text.starts_with("Sprite,4,1,\"sb/my file.png\",320,240.5\n"));
}

#[test]
fn animation_header_appends_frame_fields() {
    let placement = Placement {
        layer: Layer::Foreground,
        origin: Origin::BottomRight,
        file: "sb/run.png".to_string(),
        x: 100.0,
        y: 50.0,
    };
    let mut obj = StoryObject::animation(placement, 8, 40.0, LoopType::Once);
    obj.fade(Timing::span(0, 1000), 1.0, None);
    let text = written(&obj);
    assert!(text.starts_with("Animation,3,9,sb/run.png,100,50,8,40,LoopOnce\n"));
    assert_eq!(obj.scope_name(), "animation");
}

#[test]
fn untimed_commands_take_the_loop_window() {
    let mut obj = StoryObject::sprite(Layer::Background, Origin::TopLeft, "rain.png", 12.0, 0.0);
    obj.colour(Timing::auto(), [200, 200, 200], [None; 3])
        .scale(Timing::auto(), 0.9, None);
    obj.loop_(1000, 3)
        .move_y(Timing::span(0, 500), -32.0, 480.0);
    assert_eq!(
        written(&obj),
        "Sprite,0,0,rain.png,12,0\n\
         \x20C,0,1000,2500,200,200,200,200,200,200\n\
         \x20S,0,1000,2500,0.9,0.9\n\
         \x20L,1000,3\n\
         \x20\x20MY,0,0,500,-32,480\n"
    );
}

#[test]
fn trigger_is_returned_for_nested_appends() {
    let mut obj = StoryObject::sprite(Layer::Pass, Origin::Centre, "ok.png", 0.0, 0.0);
    obj.fade(Timing::span(0, 5000), 1.0, None);
    obj.trigger(0, 5000, TriggerType::Passing)
        .fade(Timing::span(0, 250), 0.0, 1.0)
        .parameter(Timing::auto(), crate::ParameterType::AdditiveBlending);
    assert_eq!(obj.nodes().len(), 2);
    let text = written(&obj);
    assert!(text.ends_with(" T,Passing,0,5000\n  F,0,0,250,0,1\n  P,0,0,250,A\n"));
}

#[test]
fn object_without_timed_commands_fails() {
    let mut obj = StoryObject::sprite(Layer::Background, Origin::TopLeft, "a.png", 0.0, 0.0);
    let mut out = Vec::new();
    assert!(matches!(
        obj.write(&mut out).unwrap_err(),
        OsbError::MissingRequiredTiming(_)
    ));

    obj.fade(Timing::auto(), 1.0, None);
    let err = obj.write(&mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("sprite"));
}
