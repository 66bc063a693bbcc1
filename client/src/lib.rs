//! The client library for a tic-tac-toe web app with move history.

mod board;

use board::Board;
use leptos::{ev, prelude::*};
use ttt_core::{
    game::Coord,
    session::{MoveListItem, Session},
};
use web_sys::KeyboardEvent;

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(
            &web_sys::wasm_bindgen::JsValue::from_str(&format_args!($($t)*).to_string())
        )
    };
}

/// Entry-point for the app.
///
/// Owns the game session. Every mutation happens in the handlers below.
#[component]
pub fn Game() -> impl IntoView {
    let session = RwSignal::new(Session::new());

    let board = Memo::new(move |_| session.read().record().board().clone());
    let evaluation = Memo::new(move |_| session.read().evaluation());

    // Rejected moves leave the session as is.
    let on_cell_activate = move |index: usize, coord: Coord| {
        if let Err(err) = session.write().activate_cell(index, coord) {
            console_log!("{err}");
        }
    };

    let jump_to = move |step: usize| {
        if let Err(err) = session.write().jump_to(step) {
            console_log!("{err}");
        }
    };

    // Handles `keydown` events.
    //
    // - Undoes the previous move (if any) on Backspace or Ctrl+Z.
    // - Redoes the next move (if any) on Shift+Backspace or Ctrl+Shift+Z.
    // - Jumps to the game start on Home.
    // - Jumps to the last move on End.
    let on_keydown = move |ev: KeyboardEvent| {
        let code = ev.code();
        match &code[..] {
            "Backspace" | "KeyZ" => {
                if code == "KeyZ" && !ev.ctrl_key() {
                    return;
                }
                if ev.shift_key() {
                    if !session.read().record().has_future() {
                        return;
                    }
                    session.write().redo();
                } else {
                    if !session.read().record().has_past() {
                        return;
                    }
                    session.write().undo();
                }
            }
            "Home" => {
                if !session.read().record().has_past() {
                    return;
                }
                jump_to(0);
            }
            "End" => {
                if !session.read().record().has_future() {
                    return;
                }
                session.write().jump_to_end();
            }
            _ => {}
        }
    };

    let handle = window_event_listener(ev::keydown, on_keydown);
    on_cleanup(move || handle.remove());

    let moves = move || {
        session
            .read()
            .move_list()
            .into_iter()
            .map(|MoveListItem { step, label, current }| {
                view! {
                    <li>
                        <button class="jump-to" class:current=current on:click=move |_| jump_to(step)>
                            {label}
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="game">
            <div class="game-board">
                <Board board=board evaluation=evaluation on_cell_activate=on_cell_activate />
            </div>
            <div class="game-info">
                <div class="status">{move || session.read().status().to_string()}</div>
                <div>
                    "History order: "
                    <button class="order" on:click=move |_| session.write().toggle_order()>
                        {move || session.read().order().to_string()}
                    </button>
                </div>
                <ol>{moves}</ol>
            </div>
        </div>
    }
}
