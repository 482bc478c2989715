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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use flipdeck_core::session::CardView;
use flipdeck_core::session::Face;
use flipdeck_core::session::Tally;
use flipdeck_core::session::Verdict;
use maud::Markup;
use maud::html;

use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let body = match state.mutable.lock() {
        Ok(mutable) => {
            if mutable.finished {
                render_finished(mutable.session.cards().len(), mutable.session.tally())
            } else {
                render_session(&mutable.session.view())
            }
        }
        Err(_) => {
            log::error!("Session lock poisoned");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal Server Error".to_string()),
            );
        }
    };
    (StatusCode::OK, Html(page_template(body).into_string()))
}

fn render_session(view: &CardView) -> Markup {
    let face_label = match view.face {
        Face::Question => "Question",
        Face::Answer => "Answer",
    };
    html! {
        div.root {
            div.header {
                div.position { "Card " (view.position) " of " (view.total) }
                (render_tally(view.tally))
                form.header-action action="/" method="post" {
                    input id="end" type="submit" name="action" value="End" title="End the session";
                }
            }
            div.card-container {
                form action="/" method="post" {
                    button.card type="submit" name="action" value="Flip" title="Click to flip the card." {
                        div.card-header { h1 { (face_label) } }
                        div.card-content { (view.visible_text()) }
                    }
                }
            }
            @if let Some(verdict) = view.verdict {
                (render_verdict(verdict, &view.answer))
            }
            @if view.quiz_mode {
                form.quiz action="/" method="post" {
                    input id="answer" type="text" name="answer" placeholder="Type your answer" autocomplete="off" autofocus;
                    button id="check" type="submit" name="action" value="Check" { "Check Answer" }
                }
            }
            div.controls {
                form action="/" method="post" {
                    div.nav {
                        button id="previous" type="submit" name="action" value="Previous" { "Previous" }
                        button id="next" type="submit" name="action" value="Next" { "Next" }
                    }
                    div.actions {
                        button id="shuffle" type="submit" name="action" value="Shuffle" { "Shuffle" }
                        button id="known" type="submit" name="action" value="MarkKnown" { "Mark as Known" }
                        button id="unknown" type="submit" name="action" value="MarkUnknown" { "Mark as Unknown" }
                        button id="quiz" type="submit" name="action" value="ToggleQuiz" { "Toggle Quiz Mode" }
                    }
                }
            }
        }
    }
}

fn render_verdict(verdict: Verdict, answer: &str) -> Markup {
    match verdict {
        Verdict::Correct => html! {
            div.verdict.correct { "Correct!" }
        },
        Verdict::Incorrect => html! {
            div.verdict.incorrect { "Incorrect! The correct answer is: " (answer) }
        },
    }
}

fn render_tally(tally: Tally) -> Markup {
    html! {
        div.tally {
            span.known { "Known: " (tally.known) }
            span.unknown { "Unknown: " (tally.unknown) }
            span.unseen { "Unseen: " (tally.unseen) }
        }
    }
}

fn render_finished(total: usize, tally: Tally) -> Markup {
    html! {
        div.finished {
            h1 { "Session Ended" }
            h2 { "Session Stats" }
            div.stats {
                table {
                    tbody {
                        tr {
                            td.key { "Total Cards" }
                            td.val { (total) }
                        }
                        tr {
                            td.key { "Known" }
                            td.val { (tally.known) }
                        }
                        tr {
                            td.key { "Unknown" }
                            td.val { (tally.unknown) }
                        }
                        tr {
                            td.key { "Unmarked" }
                            td.val { (tally.unseen) }
                        }
                    }
                }
            }
            div.shutdown-container {
                form action="/" method="post" {
                    input #shutdown .shutdown-button type="submit" name="action" value="Shutdown" title="Shut down the server";
                }
            }
        }
    }
}
