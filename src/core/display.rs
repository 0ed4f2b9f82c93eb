use crate::core::{DisplayOutcome, FetchOutcome, JsonSource, Notifier, OutputSurface, Result};

pub const SUCCESS_PREFIX: &str = "Your Json result is:  ";
pub const FAILURE_MESSAGE: &str = "Something went wrong.";

pub fn success_message(text: &str) -> String {
    format!("{}{}", SUCCESS_PREFIX, text)
}

/// Fetches one JSON document and shows its `result` field.
///
/// Exactly one notification is produced per `run()`. The output surface is
/// written only when the response status is 200 and the body parses.
pub struct FetchAndDisplay<S: JsonSource, N: Notifier, O: OutputSurface> {
    source: S,
    notifier: N,
    surface: O,
}

impl<S: JsonSource, N: Notifier, O: OutputSurface> FetchAndDisplay<S, N, O> {
    pub fn new(source: S, notifier: N, surface: O) -> Self {
        Self {
            source,
            notifier,
            surface,
        }
    }

    pub fn surface(&self) -> &O {
        &self.surface
    }

    pub async fn run(&self) -> Result<DisplayOutcome> {
        tracing::debug!("Fetching JSON document");

        let outcome = match self.source.fetch_json().await {
            Ok(outcome) => outcome,
            Err(e) => {
                // Transport and decode failures get the same notice as a bad status.
                tracing::error!("Fetch did not complete: {}", e);
                if let Err(notify_err) = self.notifier.notify(FAILURE_MESSAGE).await {
                    tracing::error!("Failure notice not shown: {}", notify_err);
                }
                return Err(e);
            }
        };

        match outcome {
            FetchOutcome::Success(document) => {
                let text = document.result_text();
                if document.result().is_none() {
                    tracing::warn!("Response has no 'result' field, showing empty text");
                }

                self.notifier.notify(&success_message(&text)).await?;
                self.surface.set_text(&text).await?;
                tracing::info!("Wrote {} bytes to '{}'", text.len(), self.surface.name());

                Ok(DisplayOutcome::Displayed { text })
            }
            FetchOutcome::Failure { status } => {
                tracing::warn!("Request failed with status {}", status);
                self.notifier.notify(FAILURE_MESSAGE).await?;
                Ok(DisplayOutcome::Failed { status })
            }
        }
    }
}
