use super::*;

#[test]
fn test_color_other() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::Black.other(), Color::White);
}

#[test]
fn test_move_equality_is_structural() {
    let a = Move::new(6, 0, 5, 0, MoveType::Normal);
    let b = Move::new(6, 0, 5, 0, MoveType::Normal);
    assert_eq!(a, b);
    assert_ne!(a, Move::new(6, 0, 5, 0, MoveType::Capture));

    // Promotion variant participates in equality.
    let q = Move::promotion(1, 0, 0, 0, PieceKind::Queen);
    let r = Move::promotion(1, 0, 0, 0, PieceKind::Rook);
    assert_ne!(q, r);
}

#[test]
fn test_in_bounds() {
    assert!(in_bounds(0, 0));
    assert!(in_bounds(7, 7));
    assert!(!in_bounds(-1, 0));
    assert!(!in_bounds(0, 8));
}

#[test]
fn test_move_json_shape() {
    // Boundary consumers receive moves as JSON with these exact fields.
    let mv = Move::promotion(1, 0, 0, 0, PieceKind::Queen);
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(
        json,
        r#"{"from_row":1,"from_col":0,"to_row":0,"to_col":0,"kind":"Promotion","promotion":"Queen"}"#
    );
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}
