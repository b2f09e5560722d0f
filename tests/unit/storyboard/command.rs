use super::*;

fn line(cmd: &Command) -> String {
    cmd.record()
        .to_line(1, TimeMs(10), TimeMs(20))
        .unwrap()
}

#[test]
fn missing_end_values_copy_their_start() {
    let cmd = Command::move_(Timing::auto(), 0.25, -7.5, None, Some(3.0));
    assert_eq!(
        cmd.kind,
        CommandKind::Move {
            start_x: 0.25,
            start_y: -7.5,
            end_x: 0.25,
            end_y: 3.0,
        }
    );

    let cmd = Command::colour(Timing::auto(), [10, 20, 30], [None, Some(200), None]);
    assert_eq!(
        cmd.kind,
        CommandKind::Colour {
            start_red: 10,
            start_green: 20,
            start_blue: 30,
            end_red: 10,
            end_green: 200,
            end_blue: 30,
        }
    );

    let v = 0.1 + 0.2;
    let cmd = Command::scale(Timing::auto(), v, None);
    let CommandKind::Scale { end_scale, .. } = cmd.kind else {
        panic!("expected scale");
    };
    assert_eq!(end_scale.to_bits(), v.to_bits());
}

#[test]
fn every_variant_packs_in_declared_order() {
    let t = Timing::span(0, 1000);
    let cases = [
        (Command::fade(t, 0.0, Some(1.0)), " F,0,0,1000,0,1\n"),
        (
            Command::move_(t, 1.0, 2.0, Some(3.0), Some(4.0)),
            " M,0,0,1000,1,2,3,4\n",
        ),
        (Command::move_x(t, 5.0, Some(6.0)), " MX,0,0,1000,5,6\n"),
        (Command::move_y(t, -32.0, Some(480.0)), " MY,0,0,1000,-32,480\n"),
        (Command::scale(t, 0.5, None), " S,0,0,1000,0.5,0.5\n"),
        (
            Command::vector_scale(t, 1.0, 2.0, None, Some(0.5)),
            " V,0,0,1000,1,2,1,0.5\n",
        ),
        (Command::rotate(t, 0.0, Some(1.5)), " R,0,0,1000,0,1.5\n"),
        (
            Command::colour(t, [255, 128, 0], [Some(0), None, Some(255)]),
            " C,0,0,1000,255,128,0,0,128,255\n",
        ),
        (
            Command::parameter(t, ParameterType::FlipVertical),
            " P,0,0,1000,V\n",
        ),
    ];
    for (cmd, expected) in cases {
        assert_eq!(line(&cmd), expected);
    }
}

#[test]
fn unset_timing_uses_inherited_defaults() {
    let cmd = Command::fade(Timing::auto().eased(Easing::QuadOut), 1.0, None);
    assert_eq!(line(&cmd), " F,4,10,20,1,1\n");

    let cmd = Command::fade(Timing::starting(15), 1.0, None);
    assert_eq!(line(&cmd), " F,0,15,20,1,1\n");

    let cmd = Command::fade(Timing::until(12), 1.0, None);
    assert_eq!(line(&cmd), " F,0,10,12,1,1\n");
}

#[test]
fn timing_deserializes_with_defaults() {
    let t: Timing = serde_json::from_str(r#"{"start": 250}"#).unwrap();
    assert_eq!(t, Timing::starting(250));
    let t: Timing = serde_json::from_str(r#"{"easing": "BackIn", "end": 9}"#).unwrap();
    assert_eq!(t, Timing::until(9).eased(Easing::BackIn));
}
