use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use yomu_config::SettingToggle;

use crate::client::LookupClient;
use crate::render::{render_history, render_lookup, render_settings};

const HELP: &str = "\
Type Japanese text to look it up. Commands:
  :history            list past lookups
  :clear              clear history
  :settings           show settings
  :toggle <name>      flip autoHide, showReadings or showMeanings
  :quit               leave
";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Lookup(String),
    History,
    Clear,
    Settings,
    Toggle(SettingToggle),
    Help,
    Quit,
    Unknown(String),
    Blank,
}

impl SessionInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return SessionInput::Blank;
        }

        let Some(command) = trimmed.strip_prefix(':') else {
            return SessionInput::Lookup(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("history"), None) => SessionInput::History,
            (Some("clear"), None) => SessionInput::Clear,
            (Some("settings"), None) => SessionInput::Settings,
            (Some("toggle"), Some(name)) => SettingToggle::parse(name)
                .map(SessionInput::Toggle)
                .unwrap_or_else(|| SessionInput::Unknown(trimmed.to_string())),
            (Some("help"), None) => SessionInput::Help,
            (Some("quit" | "q"), None) => SessionInput::Quit,
            _ => SessionInput::Unknown(trimmed.to_string()),
        }
    }
}

/// Interactive lookup session over stdin
pub async fn watch_stdin(client: LookupClient, cancel: CancellationToken) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Read once; later changes come back in toggle replies
    let mut settings = client.settings().await?;

    if interactive {
        print!("{HELP}");
    }

    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            tracing::info!("Input closed");
            break;
        };

        let outcome = match SessionInput::parse(&line) {
            SessionInput::Blank => Ok(()),
            SessionInput::Quit => break,
            SessionInput::Help => {
                print!("{HELP}");
                Ok(())
            }
            SessionInput::Unknown(command) => {
                eprintln!("Unknown command: {command} (try :help)");
                Ok(())
            }
            SessionInput::Lookup(text) => client.lookup(text).await.map(|result| {
                if let Some(panel) = render_lookup(&result, &settings) {
                    print!("{panel}");
                }
            }),
            SessionInput::History => client
                .history()
                .await
                .map(|entries| print!("{}", render_history(&entries))),
            SessionInput::Clear => client
                .clear_history()
                .await
                .map(|()| println!("History cleared.")),
            SessionInput::Settings => {
                print!("{}", render_settings(&settings));
                Ok(())
            }
            SessionInput::Toggle(toggle) => client.toggle(toggle).await.map(|updated| {
                settings = updated;
                println!("{}: {}", toggle.as_str(), settings.get(toggle));
            }),
        };

        if let Err(e) = outcome {
            eprintln!("{e}");
        }
    }

    Ok(())
}
