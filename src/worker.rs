//! Executes UI commands on the tokio runtime.
//!
//! The UI thread never blocks on the network: it sends a [`UiCommand`] and
//! later receives the outcome as an [`AppEvent`].

use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::api::{ComicClient, ComicRequest, ImageLoader, PANEL_COUNT};
use crate::ui::events::AppEvent;

#[derive(Debug)]
pub enum UiCommand {
    /// Run one generation round-trip.
    Generate { request: ComicRequest },
    /// Fetch the images of the result tagged `generation`.
    FetchImages { generation: u64, urls: Vec<String> },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

const COMMAND_QUEUE: usize = 16;

/// Starts the command loop on `runtime` and returns its sender.
pub fn spawn(runtime: &Handle, client: ComicClient, events: Sender<AppEvent>) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            let client = client.clone();
            let events = events.clone();
            tokio::spawn(async move {
                execute(&client, command, &events).await;
            });
        }
        tracing::debug!("Command channel closed, worker exiting");
    });

    tx
}

/// Runs one command to completion and posts its outcome.
pub async fn execute(client: &ComicClient, command: UiCommand, events: &Sender<AppEvent>) {
    match command {
        UiCommand::Generate { request } => {
            let event = match client.generate(&request).await {
                Ok(response) => AppEvent::ComicReady { request, response },
                Err(err) => {
                    tracing::error!(kind = err.error_type(), error = %err, "Generation failed");
                    AppEvent::ComicFailed {
                        message: err.user_message(),
                    }
                }
            };
            let _ = events.send(event);
        }
        UiCommand::FetchImages { generation, urls } => {
            fetch_images(client.image_loader(), generation, urls, events).await;
        }
    }
}

/// Fetches every panel image concurrently and posts each outcome as soon as
/// it lands, so one slow host never holds back the other slots.
async fn fetch_images(
    loader: ImageLoader,
    generation: u64,
    urls: Vec<String>,
    events: &Sender<AppEvent>,
) {
    let mut tasks = JoinSet::new();
    for (index, url) in urls.into_iter().enumerate().take(PANEL_COUNT) {
        if url.is_empty() {
            continue;
        }
        let loader = loader.clone();
        tasks.spawn(async move {
            let result = loader.fetch(&url).await;
            (index, url, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let event = match joined {
            Ok((index, _, Ok(image))) => AppEvent::ImageLoaded {
                generation,
                index,
                image,
            },
            Ok((index, url, Err(err))) => {
                tracing::warn!(%url, error = %err, "Panel image unavailable");
                AppEvent::ImageFailed { generation, index }
            }
            Err(err) => {
                tracing::error!(error = %err, "Image task panicked");
                continue;
            }
        };
        let _ = events.send(event);
    }
}
