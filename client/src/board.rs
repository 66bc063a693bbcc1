use leptos::prelude::*;
use ttt_core::game::{self, Coord, Evaluation, Mark};

/// A single cell of the board.
///
/// Highlighted cells are on the winning line.
#[component]
pub fn Square(
    #[prop(into)] value: Signal<Option<Mark>>,
    #[prop(into)] highlight: Signal<bool>,
    on_activate: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button class="square" class:highlight=move || highlight.get() on:click=move |_| on_activate()>
            {move || value.get().map(|mark| mark.to_string())}
        </button>
    }
}

/// The board component.
///
/// Lays out the cells in row-major order and reports activations
/// with both the flat index and the coordinate of the cell.
#[component]
pub fn Board(
    board: Memo<game::Board>,
    evaluation: Memo<Evaluation>,
    on_cell_activate: impl Fn(usize, Coord) + Copy + 'static,
) -> impl IntoView {
    // The size never changes during a game.
    let size = board.read_untracked().size();

    (0..size.rows())
        .map(|row| {
            let squares = (0..size.cols())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    let index = row * size.cols() + col;
                    view! {
                        <Square
                            value=Signal::derive(move || board.read().get(index))
                            highlight=Signal::derive(move || evaluation.read().contains(index))
                            on_activate=move || on_cell_activate(index, coord)
                        />
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="board-row">{squares}</div> }
        })
        .collect::<Vec<_>>()
}
