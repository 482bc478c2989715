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

use clap::Parser;
use tokio::spawn;

use crate::cmd::check::check_deck;
use crate::cmd::drill::server::ServerConfig;
use crate::cmd::drill::server::start_server;
use crate::config::Config;
use crate::config::DEFAULT_HOST;
use crate::config::DEFAULT_PORT;
use crate::config::resolve;
use crate::error::Fallible;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill a deck through a web interface.
    Drill {
        /// Path to the deck file. By default, `data/flashcards.json` in the current working directory is used.
        deck: Option<String>,
        /// Path to a TOML config file. By default, `flipdeck.toml` is read from the current working directory if it exists.
        #[arg(long)]
        config: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// The port to use for the web server. Default is 8000.
        #[arg(long)]
        port: Option<u16>,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
        /// Whether to shuffle the deck before the first card. Default is false.
        #[arg(long)]
        shuffle: Option<bool>,
        /// Whether to start in quiz mode. Default is false.
        #[arg(long)]
        quiz: Option<bool>,
    },
    /// Check that a deck file loads.
    Check {
        /// Path to the deck file. By default, `data/flashcards.json` in the current working directory is used.
        deck: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            deck,
            config,
            host,
            port,
            open_browser,
            shuffle,
            quiz,
        } => {
            let file = Config::load(config.as_deref())?;
            let host = resolve(host, file.host, DEFAULT_HOST.to_string());
            let port = resolve(port, file.port, DEFAULT_PORT);
            if resolve(open_browser, file.open_browser, true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            if let Err(e) = open::that(format!("http://{browser_host}:{port}/")) {
                                log::warn!("Failed to open browser: {e}");
                            }
                        }
                        Err(e) => log::error!("Failed to connect to server: {e}"),
                    }
                });
            }
            let config = ServerConfig {
                deck,
                host,
                port,
                shuffle: resolve(shuffle, file.shuffle, false),
                quiz: resolve(quiz, file.quiz, false),
            };
            start_server(config).await
        }
        Command::Check { deck } => check_deck(deck),
    }
}
