use iced::widget::{column, container};
use iced::{event, window, Element, Event, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod gemini;
mod io;
mod state;
mod ui;

use config::Config;
use gemini::{DataUri, GeminiClient, GenerationError};
use io::download::{self, DownloadError};
use io::upload::{self, UploadError};
use state::data::SourceImage;
use state::edit::SessionController;
use state::presets::PRESET_PROMPTS;
use ui::comparison::{ComparisonState, ViewMode};

/// Main application state
struct Morpheum {
    /// Client for the generation service
    client: GeminiClient,
    /// The current edit session and its display handles
    sessions: SessionController,
    /// Comparison view mode and slider position
    comparison: ComparisonState,
    /// Contents of the prompt input
    prompt: String,
    /// A file is being dragged over the window
    drop_hover: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Select File"
    PickImage,
    /// User clicked "Replace" in the editor
    ReplaceImage,
    /// User clicked "Clear" in the editor
    ClearImage,
    /// A file is hovering over the window
    FileHovered,
    /// The hovering file left the window
    FileHoverLeft,
    /// A file was dropped on the window
    FileDropped(PathBuf),
    /// Background file read completed
    ImageLoaded(Result<SourceImage, UploadError>),
    /// Prompt input changed
    PromptChanged(String),
    /// A preset chip was clicked
    PresetSelected(usize),
    /// User asked for a generation
    Generate,
    /// Background generation completed
    GenerationFinished {
        session_id: u64,
        prompt: String,
        outcome: Result<DataUri, GenerationError>,
    },
    /// A comparison layout was chosen
    ViewModeSelected(ViewMode),
    /// The reveal slider moved
    SliderMoved(f32),
    /// User clicked "Download"
    Download,
    /// Background save completed
    DownloadFinished(Result<PathBuf, DownloadError>),
}

impl Morpheum {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        if !config.has_api_key() {
            tracing::warn!("🔑 No API key configured; set GEMINI_API_KEY to enable generation");
        }
        tracing::info!("🎨 Morpheum initialized with model {}", config.model);

        (
            Morpheum {
                client: GeminiClient::new(config),
                sessions: SessionController::new(),
                comparison: ComparisonState::default(),
                prompt: String::new(),
                drop_hover: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle(message);

        // The comparison view follows the result: no result, no comparison
        let has_result = self
            .sessions
            .session()
            .is_some_and(|session| session.result.is_some());
        self.comparison.sync_result(has_result);

        task
    }

    fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage | Message::ReplaceImage => match upload::pick_image_file() {
                Some(path) => load(path),
                None => Task::none(),
            },
            Message::FileHovered => {
                self.drop_hover = true;
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drop_hover = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drop_hover = false;
                load(path)
            }
            Message::ImageLoaded(Ok(source)) => {
                if self.sessions.session().is_some() {
                    self.sessions.replace(source);
                } else {
                    self.sessions.select_image(source);
                }
                Task::none()
            }
            Message::ImageLoaded(Err(err)) => {
                tracing::warn!("⚠️  {}", err);
                upload::alert(&err);
                Task::none()
            }
            Message::ClearImage => {
                self.sessions.reset();
                self.prompt.clear();
                Task::none()
            }
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Task::none()
            }
            Message::PresetSelected(index) => {
                if let Some(preset) = PRESET_PROMPTS.get(index) {
                    self.prompt = preset.prompt.to_string();
                }
                Task::none()
            }
            Message::Generate => {
                let Some(job) = self.sessions.begin_generation(&self.prompt) else {
                    return Task::none();
                };

                // Launch the request in the background
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let outcome = client.generate(&job.image, &job.mime_type, &job.prompt).await;
                        (job.session_id, job.prompt, outcome)
                    },
                    |(session_id, prompt, outcome)| Message::GenerationFinished {
                        session_id,
                        prompt,
                        outcome,
                    },
                )
            }
            Message::GenerationFinished {
                session_id,
                prompt,
                outcome,
            } => {
                self.sessions.finish_generation(session_id, prompt, outcome);
                Task::none()
            }
            Message::ViewModeSelected(mode) => {
                self.comparison.set_mode(mode);
                Task::none()
            }
            Message::SliderMoved(position) => {
                self.comparison.set_slider_position(position);
                Task::none()
            }
            Message::Download => {
                let Some(result) = self.sessions.session().and_then(|s| s.result.as_ref()) else {
                    return Task::none();
                };

                match download::pick_destination(&result.data_uri) {
                    Some(path) => Task::perform(
                        download::save_result(result.data_uri.clone(), path),
                        Message::DownloadFinished,
                    ),
                    None => Task::none(),
                }
            }
            Message::DownloadFinished(Ok(_)) => Task::none(),
            Message::DownloadFinished(Err(err)) => {
                tracing::error!("❌ {}", err);
                download::alert(&err);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = match (self.sessions.session(), self.sessions.original_handle()) {
            (Some(session), Some(original)) => {
                ui::editor::view(session, original, &self.comparison, &self.prompt)
            }
            _ => ui::landing::view(self.drop_hover),
        };

        column![
            ui::landing::header(&self.client.config().model),
            container(body)
                .padding([16, 32])
                .width(Length::Fill)
                .height(Length::Fill),
            ui::landing::footer(),
        ]
        .into()
    }

    /// Window file drag-and-drop
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Read a file in the background
fn load(path: PathBuf) -> Task<Message> {
    tracing::info!("📂 Loading {}", path.display());
    Task::perform(upload::load_image(path), Message::ImageLoaded)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("morpheum=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let config = Config::from_env();

    iced::application("Morpheum", Morpheum::update, Morpheum::view)
        .subscription(Morpheum::subscription)
        .theme(Morpheum::theme)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(move || Morpheum::new(config))
}
