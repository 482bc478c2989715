// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use serde::Deserialize;

use crate::cmd::drill::state::ServerState;
use crate::error::ErrorReport;
use crate::error::Fallible;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub enum Action {
    Flip,
    Next,
    Previous,
    Shuffle,
    MarkKnown,
    MarkUnknown,
    ToggleQuiz,
    Check,
    End,
    Shutdown,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    /// Only sent by the quiz form.
    #[serde(default)]
    answer: String,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Response {
    match action_handler(&state, form) {
        Ok(Action::Shutdown) => (StatusCode::OK, Html("Shutting down.".to_string())).into_response(),
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            log::error!("{e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal Server Error".to_string()),
            )
                .into_response()
        }
    }
}

fn action_handler(state: &ServerState, form: FormData) -> Fallible<Action> {
    let FormData { action, answer } = form;
    log::debug!("Action: {action:?}");
    if action == Action::Shutdown {
        let tx = state
            .shutdown_tx
            .lock()
            .map_err(|_| ErrorReport::new("shutdown channel lock poisoned."))?
            .take();
        if let Some(tx) = tx {
            let _ = tx.send(());
        }
        return Ok(action);
    }
    let mut mutable = state
        .mutable
        .lock()
        .map_err(|_| ErrorReport::new("session lock poisoned."))?;
    if mutable.finished {
        log::debug!("Session already ended, ignoring {action:?}");
        return Ok(action);
    }
    let session = &mut mutable.session;
    match action {
        Action::Flip => session.flip(),
        Action::Next => session.next(),
        Action::Previous => session.previous(),
        Action::Shuffle => session.shuffle(),
        Action::MarkKnown => session.mark_known(),
        Action::MarkUnknown => session.mark_unknown(),
        Action::ToggleQuiz => session.toggle_quiz_mode(),
        Action::Check => {
            let correct = session.check_answer(&answer);
            log::debug!("Answer {answer:?} correct: {correct}");
        }
        Action::End => {
            let tally = session.tally();
            log::info!(
                "Session ended: {} known, {} unknown, {} unmarked",
                tally.known,
                tally.unknown,
                tally.unseen
            );
            mutable.finished = true;
        }
        Action::Shutdown => {}
    }
    Ok(action)
}
