//! Tests for the scoring rule.

use super::*;

#[test]
fn test_start_uses_start_cell_weight() {
    let weights = WeightAssignment::new(3, 5, 7);
    for label in Label::ALL {
        let acc = ScoreAccumulator::start(label, &weights);
        assert_eq!(acc.score(), weights.weight(label));
        assert_eq!(acc.prev_label(), label);
    }
}

#[test]
fn test_same_label_adds() {
    let weights = WeightAssignment::new(3, 5, 7);
    let acc = ScoreAccumulator::start(Label::A, &weights).step(Label::A, &weights);
    assert_eq!(acc.score(), 6);
    assert_eq!(acc.prev_label(), Label::A);
}

#[test]
fn test_label_change_multiplies() {
    let weights = WeightAssignment::new(3, 5, 7);
    let acc = ScoreAccumulator::from_parts(6, Label::A).step(Label::B, &weights);
    assert_eq!(acc.score(), 30);
    assert_eq!(acc.prev_label(), Label::B);
}

#[test]
fn test_previous_label_is_last_visited_cell() {
    let weights = WeightAssignment::new(2, 3, 4);
    // A -> B -> B -> A: 2, 2*3 = 6, 6+3 = 9, 9*2 = 18
    let acc = ScoreAccumulator::start(Label::A, &weights)
        .step(Label::B, &weights)
        .step(Label::B, &weights)
        .step(Label::A, &weights);
    assert_eq!(acc.score(), 18);
    assert_eq!(acc.prev_label(), Label::A);
}

#[test]
fn test_trace_a_a_b() {
    // a6 (A) -> b4 (A) -> d3 (B) on the reference grid, with weight(A) = 3
    let grid = Grid::reference();
    let path = [Position::new(0, 0), Position::new(2, 1), Position::new(3, 3)];
    for b in [1, 2, 5, 11] {
        let weights = WeightAssignment::new(3, b, 20);
        let trace = score_trace(&grid, &weights, &path);
        assert_eq!(trace, vec![3, 6, 6 * b as Score]);
    }
}

#[test]
fn test_trace_empty() {
    let grid = Grid::reference();
    let weights = WeightAssignment::new(1, 2, 3);
    assert!(score_trace(&grid, &weights, &[]).is_empty());
}

#[test]
fn test_step_saturates() {
    let weights = WeightAssignment::new(1, u32::MAX, 3);
    let acc = ScoreAccumulator::from_parts(Score::MAX / 2, Label::A).step(Label::B, &weights);
    assert_eq!(acc.score(), Score::MAX);
}
