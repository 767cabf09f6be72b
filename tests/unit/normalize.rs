use super::*;
use crate::median::Coord;

fn renderer_payload(payload: &str) -> StrokeResult<CharacterRecord> {
    normalize_payload(payload, &FrameTransform::renderer(), FRAME_HEIGHT)
}

#[test]
fn end_to_end_example() {
    let rec = renderer_payload(r#"{"strokes": ["M0,0 L0,100"], "medians": [[[0,0],[0,100]]]}"#)
        .unwrap();
    assert_eq!(rec.strokes, vec!["M 0,900 L 0,800".to_string()]);
    assert_eq!(
        serde_json::to_string(&rec.medians).unwrap(),
        "[[[0,900],[0,800]]]"
    );
}

#[test]
fn input_is_not_mutated_and_result_is_repeatable() {
    let json = r#"{"strokes":["M 10 20 Q 30 40 50 60 Z"],"medians":[[[10,20],[50,60]]],"radStrokes":[0]}"#;
    let rec: CharacterRecord = serde_json::from_str(json).unwrap();
    let snapshot = rec.clone();

    let a = normalize_record(&rec).unwrap();
    let b = normalize_record(&rec).unwrap();
    assert_eq!(rec, snapshot);
    assert_eq!(a, b);
    assert_eq!(a.extra, rec.extra);
    assert_eq!(a.strokes, vec!["M 10,880 Q 30,860 50,840 Z".to_string()]);
    assert_eq!(
        a.medians,
        vec![vec![
            [Coord::Int(10), Coord::Int(880)],
            [Coord::Int(50), Coord::Int(840)]
        ]]
    );
}

#[test]
fn lengths_and_order_are_preserved() {
    let json = r#"{"strokes":["M0 0 L1 1","M5 5 Q6 6 7 7","M9 9 Z"],
                   "medians":[[[0,0]],[[1,1],[2,2]],[[3,3],[4,4],[5,5]]]}"#;
    let rec: CharacterRecord = serde_json::from_str(json).unwrap();
    let out = normalize_record(&rec).unwrap();
    assert_eq!(out.strokes.len(), 3);
    assert!(out.strokes[1].starts_with("M 5,895"));
    assert_eq!(
        out.medians.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    for (i, m) in rec.medians.iter().enumerate() {
        for (j, [x, y]) in m.iter().enumerate() {
            assert_eq!(out.medians[i][j][0], *x);
            assert_eq!(out.medians[i][j][1].as_f64(), 900.0 - y.as_f64());
        }
    }
}

#[test]
fn bad_stroke_fails_the_whole_record() {
    let err = renderer_payload(r#"{"strokes":["M0 0","M0 0 L"],"medians":[]}"#).unwrap_err();
    let StrokeError::MalformedPayload(msg) = err else {
        panic!("expected malformed payload");
    };
    assert!(msg.starts_with("stroke 1:"), "{msg}");
}

#[test]
fn bad_json_shape_is_malformed() {
    for payload in [
        "not json",
        r#"{"strokes":[1],"medians":[]}"#,
        r#"{"strokes":[],"medians":[[[0,0,0]]]}"#,
        r#"["strokes"]"#,
    ] {
        assert!(
            matches!(
                renderer_payload(payload),
                Err(StrokeError::MalformedPayload(_))
            ),
            "{payload}"
        );
    }
}

#[test]
fn custom_transform_and_height() {
    let rec: CharacterRecord =
        serde_json::from_str(r#"{"strokes":["M0 0 L0 10"],"medians":[[[0,0]]]}"#).unwrap();
    let t = FrameTransform::flip_y(1024.0).unwrap();
    let out = normalize_record_with(&rec, &t, 1024.0).unwrap();
    assert_eq!(out.strokes, vec!["M 0,1024 L 0,1014".to_string()]);
    assert_eq!(out.medians, vec![vec![[Coord::Int(0), Coord::Int(1024)]]]);
}

#[test]
fn payload_uses_the_given_frame() {
    let t = FrameTransform::flip_y(1024.0).unwrap();
    let out = normalize_payload(r#"{"strokes":["M0 0 L0 10"],"medians":[[[0,24]]]}"#, &t, 1024.0)
        .unwrap();
    assert_eq!(out.strokes, vec!["M 0,1024 L 0,1014".to_string()]);
    assert_eq!(out.medians, vec![vec![[Coord::Int(0), Coord::Int(1000)]]]);
}
