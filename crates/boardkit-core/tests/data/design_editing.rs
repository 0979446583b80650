use boardkit_core::{Board, Design, DesignError, MAX_STRIPS};

fn woods(design: &Design) -> Vec<String> {
    design.strips().iter().map(|s| s.wood.clone()).collect()
}

#[test]
fn test_sequence_never_drops_below_one() {
    let mut design = Design::new();
    while design.len() > 1 {
        design.remove(design.len() - 1).unwrap();
    }
    assert_eq!(design.remove(0), Err(DesignError::LastStrip));
    assert_eq!(design.len(), 1);
}

#[test]
fn test_first_up_and_last_down_leave_sequence_unchanged() {
    let mut design = Design::new();
    design.set_wood(2, "Cherry").unwrap();
    let before = design.clone();

    assert_eq!(design.move_up(0), Ok(false));
    assert_eq!(design, before);
    assert_eq!(design.move_down(design.len() - 1), Ok(false));
    assert_eq!(design, before);
}

#[test]
fn test_reorder_is_adjacent_swap() {
    let mut design = Design::new();
    design.set_wood(2, "Cherry").unwrap();
    design.move_down(1).unwrap();
    assert_eq!(woods(&design), vec!["Maple", "Cherry", "Walnut"]);
    design.move_up(1).unwrap();
    assert_eq!(woods(&design), vec!["Cherry", "Maple", "Walnut"]);
}

#[test]
fn test_duplicate_shifts_following_offsets() {
    let mut design = Design::new();
    let before: Vec<f64> = design.placements().iter().map(|p| p.offset).collect();
    assert_eq!(before, vec![0.0, 2.0, 3.5]);

    design.duplicate(0).unwrap();
    let after: Vec<f64> = design.placements().iter().map(|p| p.offset).collect();
    assert_eq!(after, vec![0.0, 2.0, 4.0, 5.5]);

    // The copy is a value, not a shared reference
    design.set_width(1, 0.5).unwrap();
    assert_eq!(design.strips()[0].width, 2.0);
}

#[test]
fn test_duplicate_respects_strip_limit() {
    let mut design = Design::new();
    design.resize(MAX_STRIPS).unwrap();
    assert!(matches!(
        design.duplicate(0),
        Err(DesignError::StripCount { .. })
    ));
}

#[test]
fn test_board_change_reclamps_but_reports_overflow() {
    let mut design = Design::new();
    design.apply_width_to_all(5.0).unwrap();
    design.set_board(Board::new(4.0, 6.0).unwrap());
    assert!(design.strips().iter().all(|s| s.width == 4.0));
    let fit = design.fit();
    assert!(!fit.ok);
    assert_eq!(fit.overflow, 8.0);
}
