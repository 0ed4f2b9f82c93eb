use crate::core::{ConfigProvider, Notifier, Result};
use crate::utils::error::FetchError;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

const ACK_PROMPT: &str = "Press Enter to continue...";

/// Terminal stand-in for a modal dialog: prints a framed message and, when
/// `wait_for_ack` is set, blocks until a line is read from stdin.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    wait_for_ack: bool,
}

impl ConsoleNotifier {
    pub fn new(wait_for_ack: bool) -> Self {
        Self { wait_for_ack }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.wait_for_ack())
    }

    pub fn waits_for_ack(&self) -> bool {
        self.wait_for_ack
    }
}

pub fn frame(message: &str) -> String {
    let width = message.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let border = "─".repeat(width + 2);

    let mut out = format!("┌{}┐\n", border);
    for line in message.lines() {
        let pad = width - line.chars().count();
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    if message.is_empty() {
        out.push_str(&format!("│ {} │\n", " ".repeat(width)));
    }
    out.push_str(&format!("└{}┘\n", border));
    out
}

/// Writes the framed message to `out` and, when `wait_for_ack` is set, reads
/// one line from `input`. EOF on `input` counts as acknowledged.
pub async fn present<W, R>(message: &str, wait_for_ack: bool, out: &mut W, input: R) -> Result<()>
where
    W: AsyncWrite + Unpin,
    R: AsyncRead + Unpin,
{
    out.write_all(frame(message).as_bytes()).await?;

    if wait_for_ack {
        out.write_all(ACK_PROMPT.as_bytes()).await?;
        out.flush().await?;

        let mut line = String::new();
        let read = BufReader::new(input)
            .read_line(&mut line)
            .await
            .map_err(|e| FetchError::NotificationError {
                message: format!("could not read acknowledgement: {}", e),
            })?;
        if read == 0 {
            tracing::debug!("stdin closed, continuing without acknowledgement");
            out.write_all(b"\n").await?;
        }
    }

    out.flush().await?;
    Ok(())
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        present(message, self.wait_for_ack, &mut stdout, tokio::io::stdin()).await
    }
}
