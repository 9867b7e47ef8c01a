use super::*;

fn draw_payload() -> DrawPayload {
    DrawPayload {
        from: Point::new(10.0, 20.0),
        to: Point::new(14.0, 22.0),
        color: "#ff8000".to_owned(),
        size: 5.0,
        gesture: Some(3),
    }
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn encode_frame_uses_type_and_content_keys() {
    let frame = Frame::new("nickname", "Ana");
    let json: serde_json::Value = serde_json::from_str(&encode_frame(&frame).expect("encode")).expect("json");
    assert_eq!(json["type"], "nickname");
    assert_eq!(json["content"], "Ana");
}

#[test]
fn encode_failure_is_reported_not_emptied() {
    let mut bad = std::collections::BTreeMap::new();
    bad.insert((1_u8, 2_u8), 3_u8);
    let err = nested("players", &bad).expect_err("tuple keys are not json object keys");
    assert!(matches!(err, CodecError::Encode { ref kind, .. } if kind == "players"));
}

#[test]
fn decode_frame_defaults_missing_content_to_empty() {
    let frame = decode_frame(r#"{"type":"undo"}"#).expect("decode should succeed");
    assert_eq!(frame, Frame::bare("undo"));
}

#[test]
fn decode_frame_rejects_non_json_text() {
    let err = decode_frame("not json").expect_err("should fail");
    assert!(matches!(err, CodecError::Envelope(_)));
}

#[test]
fn decode_frame_rejects_missing_type() {
    let err = decode_frame(r#"{"content":"x"}"#).expect_err("should fail");
    assert!(matches!(err, CodecError::Envelope(_)));
}

#[test]
fn decode_binary_frame_reads_utf8_text() {
    let bytes = br#"{"type":"hint","content":"_ _ a"}"#;
    let frame = decode_binary_frame(bytes).expect("decode should succeed");
    assert_eq!(frame.kind, "hint");
    assert_eq!(frame.content, "_ _ a");
}

#[test]
fn decode_binary_frame_rejects_invalid_utf8() {
    let err = decode_binary_frame(&[0xff, 0xfe, 0x00]).expect_err("should fail");
    assert!(matches!(err, CodecError::Utf8(_)));
}

// =============================================================
// ClientMessage
// =============================================================

#[test]
fn client_bare_messages_carry_empty_content() {
    for message in [ClientMessage::StartGame, ClientMessage::Undo, ClientMessage::Clear] {
        let frame = message.to_frame().expect("encode");
        assert_eq!(frame.kind, message.kind());
        assert!(frame.content.is_empty());
    }
}

#[test]
fn client_draw_nests_payload_as_json_string() {
    let frame = ClientMessage::Draw(draw_payload()).to_frame().expect("encode");
    assert_eq!(frame.kind, "draw");
    let nested: serde_json::Value = serde_json::from_str(&frame.content).expect("nested json");
    assert_eq!(nested["from"]["x"], 10.0);
    assert_eq!(nested["to"]["y"], 22.0);
    assert_eq!(nested["color"], "#ff8000");
    assert_eq!(nested["size"], 5.0);
    assert_eq!(nested["gesture"], 3);
}

#[test]
fn client_draw_omits_absent_gesture() {
    let payload = DrawPayload { gesture: None, ..draw_payload() };
    let frame = ClientMessage::Draw(payload).to_frame().expect("encode");
    assert!(!frame.content.contains("gesture"));
}

#[test]
fn client_fill_nests_seed_and_color() {
    let frame = ClientMessage::Fill(FillPayload { x: 3.0, y: 4.0, color: "#000000".to_owned() }).to_frame().expect("encode");
    let nested: serde_json::Value = serde_json::from_str(&frame.content).expect("nested json");
    assert_eq!(nested["x"], 3.0);
    assert_eq!(nested["y"], 4.0);
    assert_eq!(nested["color"], "#000000");
}

#[test]
fn client_from_frame_parses_join_room() {
    let message = ClientMessage::from_frame(Frame::new("join_room", "ABCD")).expect("parse");
    assert_eq!(message, ClientMessage::JoinRoom("ABCD".to_owned()));
}

#[test]
fn client_from_frame_rejects_server_only_tag() {
    let err = ClientMessage::from_frame(Frame::new("round_end", "chat")).expect_err("should fail");
    assert!(matches!(err, CodecError::UnknownType(kind) if kind == "round_end"));
}

// =============================================================
// ServerMessage
// =============================================================

#[test]
fn server_players_parses_ordered_list() {
    let message = decode_server_message(r#"{"type":"players","content":"[\"Ana (0 pts)\",\"Bo (0 pts) 🎨\"]"}"#)
        .expect("parse");
    assert_eq!(
        message,
        ServerMessage::Players(vec!["Ana (0 pts)".to_owned(), "Bo (0 pts) 🎨".to_owned()])
    );
}

#[test]
fn server_choose_word_parses_candidates() {
    let message = ServerMessage::from_frame(Frame::new("choose_word", r#"["chat","panda","robot"]"#)).expect("parse");
    assert_eq!(
        message,
        ServerMessage::ChooseWord(vec!["chat".to_owned(), "panda".to_owned(), "robot".to_owned()])
    );
}

#[test]
fn server_draw_accepts_integer_coordinates_without_gesture() {
    let content = r##"{"from":{"x":1,"y":2},"to":{"x":3,"y":4},"color":"#123456","size":5}"##;
    let message = ServerMessage::from_frame(Frame::new("draw", content)).expect("parse");
    let ServerMessage::Draw(payload) = message else {
        panic!("expected draw");
    };
    assert_eq!(payload.from, Point::new(1.0, 2.0));
    assert_eq!(payload.to, Point::new(3.0, 4.0));
    assert_eq!(payload.gesture, None);
}

#[test]
fn server_draw_rejects_malformed_content() {
    let err = ServerMessage::from_frame(Frame::new("draw", "{\"from\":1}")).expect_err("should fail");
    assert!(matches!(err, CodecError::Content { ref kind, .. } if kind == "draw"));
}

#[test]
fn server_unknown_tag_is_rejected() {
    let err = decode_server_message(r#"{"type":"teleport","content":""}"#).expect_err("should fail");
    assert!(matches!(err, CodecError::UnknownType(kind) if kind == "teleport"));
}

#[test]
fn server_to_frame_matches_from_frame_for_nested_tags() {
    let messages = [
        ServerMessage::Players(vec!["Ana".to_owned()]),
        ServerMessage::Draw(draw_payload()),
        ServerMessage::Fill(FillPayload { x: 1.0, y: 1.0, color: "#ffffff".to_owned() }),
        ServerMessage::StartDrawingPublic("GIRAFE".to_owned()),
    ];
    for message in messages {
        let parsed = ServerMessage::from_frame(message.to_frame().expect("encode")).expect("parse");
        assert_eq!(parsed, message);
    }
}
