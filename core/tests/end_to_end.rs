#![allow(missing_docs)]

use ttt_core::{
    Error,
    game::{BoardSize, Mark},
    session::{Session, Status},
};

fn activate(session: &mut Session, index: usize) -> Result<(), Error> {
    let coord = BoardSize::CLASSIC.coord_of(index).unwrap();
    session.activate_cell(index, coord)
}

#[test]
fn top_row_win() {
    let mut session = Session::new();
    assert_eq!(session.status(), Status::InProgress(Mark::X));

    for i in [0, 4, 1, 7, 2] {
        activate(&mut session, i).unwrap();
    }

    let eval = session.evaluation();
    assert_eq!(eval.winner, Some(Mark::X));
    assert_eq!(eval.winning_line(), &[0, 1, 2]);
    assert_eq!(session.status(), Status::Won(Mark::X));
    assert_eq!(session.status().to_string(), "Winner: X");

    let before = session.clone();
    assert_eq!(activate(&mut session, 8), Err(Error::GameOver));
    assert_eq!(session, before);
}

#[test]
fn draw() {
    let mut session = Session::new();
    // X O X
    // X O O
    // O X X
    for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        activate(&mut session, i).unwrap();
    }

    assert_eq!(session.evaluation().winner, None);
    assert_eq!(session.status(), Status::Draw);
    assert_eq!(session.status().to_string(), "Draw");

    for i in 0..9 {
        assert_eq!(activate(&mut session, i), Err(Error::GameOver));
    }
    assert_eq!(session.record().entries().len(), 10);
}

#[test]
fn occupied_cell_is_a_no_op() {
    let mut session = Session::new();
    activate(&mut session, 4).unwrap();
    let before = session.clone();

    assert_eq!(activate(&mut session, 4), Err(Error::Occupied { index: 4 }));
    assert_eq!(session, before);
    assert_eq!(session.status(), Status::InProgress(Mark::O));
}

#[test]
fn mismatched_index_is_rejected() {
    let mut session = Session::new();
    let coord = BoardSize::CLASSIC.coord_of(3).unwrap();

    assert_eq!(
        session.activate_cell(4, coord),
        Err(Error::IndexMismatch {
            index: 4,
            row: 1,
            col: 0
        })
    );
    assert_eq!(session, Session::new());
}

#[test]
fn status_text() {
    let mut session = Session::new();
    assert_eq!(session.status().to_string(), "Next player: X");
    activate(&mut session, 0).unwrap();
    assert_eq!(session.status().to_string(), "Next player: O");
}
