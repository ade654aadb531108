use crate::api::{ComicRequest, ComicResponse};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::page::{PageIntent, PageReducer, PageState};
use crate::ui::panels::PanelImages;
use crate::worker::{UiCommand, UiCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Page controller.
///
/// Owns the page state and the decoded panel images, turns key presses and
/// worker results into intents, and issues commands to the worker.
pub struct App {
    should_quit: bool,
    page: PageState,
    images: PanelImages,
    command_sender: Option<UiCommandSender>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            page: PageState::default(),
            images: PanelImages::default(),
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn images(&self) -> &PanelImages {
        &self.images
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Dispatch an intent to the page reducer.
    pub fn dispatch_page(&mut self, intent: PageIntent) {
        dispatch_mvi!(self, page, PageReducer, intent);
    }

    /// Starts a submission if the form allows it.
    ///
    /// Exactly one `Generate` command is sent per accepted submission.
    /// Returns false when the form was not submittable.
    pub fn submit(&mut self) -> bool {
        if !self.page.can_submit() {
            return false;
        }

        let request = self.page.payload();
        self.dispatch_page(PageIntent::Submit);

        if let Err(message) = self.send_command(UiCommand::Generate { request }) {
            self.on_comic_failed(message);
        }
        true
    }

    pub fn on_paste(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            self.dispatch_page(PageIntent::Insert(ch));
        }
    }

    /// Applies a worker or paste event. Key, tick and resize events are the
    /// runtime's business and are ignored here.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComicReady { request, response } => self.on_comic_ready(request, response),
            AppEvent::ComicFailed { message } => self.on_comic_failed(message),
            AppEvent::ImageLoaded {
                generation,
                index,
                image,
            } => {
                if !self.images.loaded(generation, index, image) {
                    tracing::debug!(generation, index, "Dropped stale panel image");
                }
            }
            AppEvent::ImageFailed { generation, index } => {
                self.images.failed(generation, index);
            }
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    fn on_comic_ready(&mut self, request: ComicRequest, response: ComicResponse) {
        let urls = response.image_urls.clone();
        self.dispatch_page(PageIntent::Succeeded { request, response });

        let generation = self.images.reset(&urls);
        if urls.iter().any(|url| !url.is_empty()) {
            if let Err(message) = self.send_command(UiCommand::FetchImages { generation, urls }) {
                tracing::warn!(%message, "Panel images will not be fetched");
            }
        }
    }

    fn on_comic_failed(&mut self, message: String) {
        tracing::error!(%message, "Submission failed");
        self.dispatch_page(PageIntent::Failed { message });
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("Comic service is not available".to_string());
        };

        sender
            .try_send(command)
            .map_err(|err| format!("Could not start the request: {}", err))
    }
}
