use super::*;

fn cells(s: &str) -> Vec<Option<Mark>> {
    s.chars()
        .map(|c| match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        })
        .collect()
}

fn play(record: &mut Record, indices: &[usize]) {
    let size = record.size();
    for &i in indices {
        record.make_move(size.coord_of(i).unwrap()).unwrap();
    }
}

#[test]
fn test_every_line_wins() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut cells = vec![None; 9];
            for i in line {
                cells[i] = Some(mark);
            }
            let eval = evaluate(&cells, BoardSize::CLASSIC);
            assert_eq!(eval.winner, Some(mark));
            assert_eq!(eval.winning_line(), &line[..]);
        }
    }
}

#[test]
fn test_no_winner() {
    for s in ["         ", "XOX      ", "XOXXOOOXX", "XX OO    "] {
        let eval = evaluate(&cells(s), BoardSize::CLASSIC);
        assert_eq!(eval, Evaluation::default());
        assert!(eval.winning_line().is_empty());
    }
}

#[test]
fn test_first_line_in_order_wins() {
    // Both the top row and the left column are complete.
    let cells = cells("XXXX  X  ");
    let eval = evaluate(&cells, BoardSize::CLASSIC);
    assert_eq!(eval.line, Some([0, 1, 2]));
    assert_eq!(eval, evaluate(&cells, BoardSize::CLASSIC));
}

#[test]
fn test_mismatched_length_has_no_winner() {
    assert_eq!(
        evaluate(&cells("XXX"), BoardSize::CLASSIC),
        Evaluation::default()
    );
}

#[test]
fn test_winning_line_membership() {
    let eval = evaluate(&cells("  O O O  "), BoardSize::CLASSIC);
    assert_eq!(eval.line, Some([2, 4, 6]));
    for i in [2, 4, 6] {
        assert!(eval.contains(i));
    }
    for i in [0, 1, 3, 5, 7, 8] {
        assert!(!eval.contains(i));
    }
    assert!(!eval.contains(9));
    assert!(!Evaluation::default().contains(0));
}

#[test]
fn test_board_size() {
    assert_eq!(BoardSize::new(3, 3), Ok(BoardSize::CLASSIC));
    assert_eq!(
        BoardSize::new(4, 4),
        Err(Error::UnsupportedBoardSize { rows: 4, cols: 4 })
    );

    let size = BoardSize::CLASSIC;
    assert_eq!(size.index_of(Coord::new(1, 2)), Some(5));
    assert_eq!(size.coord_of(5), Some(Coord::new(1, 2)));
    assert_eq!(size.index_of(Coord::new(3, 0)), None);
    assert_eq!(size.coord_of(9), None);
}

#[test]
fn test_turn_parity() {
    let mut record = Record::new();
    assert_eq!(record.turn(), Some(Mark::X));

    play(&mut record, &[4]);
    assert_eq!(record.board().get(4), Some(Mark::X));
    assert_eq!(record.turn(), Some(Mark::O));

    play(&mut record, &[0]);
    assert_eq!(record.board().get(0), Some(Mark::O));
    assert_eq!(record.turn(), Some(Mark::X));
}

#[test]
fn test_occupied_cell_rejected() {
    let mut record = Record::new();
    play(&mut record, &[4]);
    let before = record.clone();

    assert_eq!(
        record.make_move(Coord::new(1, 1)),
        Err(Error::Occupied { index: 4 })
    );
    assert_eq!(record, before);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut record = Record::new();
    assert_eq!(
        record.make_move(Coord::new(0, 3)),
        Err(Error::OutOfBounds { row: 0, col: 3 })
    );
    assert_eq!(record, Record::new());
}

#[test]
fn test_undo_redo() {
    let mut record = Record::new();
    assert!(record.undo_move().is_none());

    play(&mut record, &[0, 4]);
    assert_eq!(
        record.undo_move().and_then(Entry::coord),
        Some(Coord::new(1, 1))
    );
    assert_eq!(record.step(), 1);
    assert!(record.has_future());

    assert_eq!(
        record.redo_move().and_then(Entry::coord),
        Some(Coord::new(1, 1))
    );
    assert_eq!(record.step(), 2);
    assert!(record.redo_move().is_none());
}

#[test]
fn test_jump_out_of_range() {
    let mut record = Record::new();
    play(&mut record, &[0, 4]);

    assert_eq!(
        record.jump(3),
        Err(Error::StepOutOfRange { step: 3, len: 3 })
    );
    assert_eq!(record.step(), 2);
}

#[test]
fn test_jump_to_end() {
    let mut record = Record::new();
    record.jump_to_end();
    assert_eq!(record.step(), 0);

    play(&mut record, &[0, 4, 8]);
    record.jump(1).unwrap();
    record.jump_to_end();
    assert_eq!(record.step(), 3);
    assert!(!record.has_future());
    assert_eq!(record.entries().len(), 4);
}

#[test]
fn test_clear() {
    let mut record = Record::new();
    play(&mut record, &[0, 4, 8]);
    record.clear();
    assert_eq!(record, Record::new());
}

#[test]
fn test_coord_display() {
    assert_eq!(Coord::new(2, 0).to_string(), "(0, 2)");
}
