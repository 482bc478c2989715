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

use std::fs::write;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;

pub const CAPITALS_DECK: &str = r#"[
    {"question": "France capital?", "answer": "Paris"},
    {"question": "2+2?", "answer": "4"}
]"#;

/// Write `content` to `deck.json` in a fresh temporary directory. The
/// directory lives as long as the returned handle.
pub fn create_tmp_deck(content: &str) -> Fallible<(TempDir, String)> {
    let dir = tempdir()?;
    let path = dir.path().join("deck.json");
    write(&path, content)?;
    Ok((dir, path.display().to_string()))
}
