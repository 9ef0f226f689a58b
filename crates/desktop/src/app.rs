use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use framestitch_core::pipeline::build_video_use_case::{BuildOutcome, BuildVideoUseCase};
use framestitch_core::pipeline::extract_frames_use_case::ExtractFramesUseCase;
use framestitch_core::pipeline::probe_video_use_case::{ProbeVideoUseCase, VideoProbe};
use framestitch_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use framestitch_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;
use framestitch_core::video::infrastructure::image_file_reader::ImageFileReader;
use framestitch_core::video::infrastructure::image_file_writer::ImageFileWriter;

use crate::settings::{Appearance, Settings};
use crate::tabs;
use crate::theme;

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    CreateVideo,
    ExtractImages,
    Appearance,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::CreateVideo, Tab::ExtractImages, Tab::Appearance];

    fn label(self) -> &'static str {
        match self {
            Tab::CreateVideo => "Images to Video",
            Tab::ExtractImages => "Video to Images",
            Tab::Appearance => "Appearance",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-session conversion inputs
// ---------------------------------------------------------------------------

/// Everything one conversion needs, collected from the pickers. Reset on
/// every launch; never persisted and never shared between invocations
/// beyond what the user sees in the fields.
#[derive(Debug, Clone)]
pub struct Session {
    pub image_dir: Option<PathBuf>,
    pub video_output: Option<PathBuf>,
    pub fps: u32,
    pub video_input: Option<PathBuf>,
    pub extract_dir: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            image_dir: None,
            video_output: None,
            fps: 30,
            video_input: None,
            extract_dir: None,
        }
    }
}

/// Result of the last conversion on a tab, shown inline.
#[derive(Debug, Clone)]
pub enum Feedback {
    Success(String),
    Notice(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),

    SelectImageFolder,
    ImageFolderSelected(Option<PathBuf>),
    SelectVideoOutput,
    VideoOutputSelected(Option<PathBuf>),
    FpsChanged(u32),
    CreateVideo,

    SelectVideo,
    VideoSelected(Option<PathBuf>),
    SelectExtractFolder,
    ExtractFolderSelected(Option<PathBuf>),
    ExtractImages,
    ShowExtractFolder,

    AppearanceChanged(Appearance),
    FontScaleChanged(f32),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub session: Session,
    pub probe: Option<Result<VideoProbe, String>>,
    pub create_feedback: Option<Feedback>,
    pub extract_feedback: Option<Feedback>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                active_tab: Tab::CreateVideo,
                settings: Settings::load(),
                session: Session::default(),
                probe: None,
                create_feedback: None,
                extract_feedback: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::SelectImageFolder => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select Image Folder")
                            .pick_folder()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::ImageFolderSelected,
                );
            }
            Message::ImageFolderSelected(Some(path)) => {
                self.session.image_dir = Some(path);
                self.create_feedback = None;
            }
            Message::ImageFolderSelected(None) => {}
            Message::SelectVideoOutput => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Save Video")
                            .add_filter("Video Files", &["mp4"])
                            .set_file_name("sequence.mp4")
                            .save_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::VideoOutputSelected,
                );
            }
            Message::VideoOutputSelected(Some(path)) => {
                self.session.video_output = Some(path);
                self.create_feedback = None;
            }
            Message::VideoOutputSelected(None) => {}
            Message::FpsChanged(fps) => {
                self.session.fps = fps;
            }
            Message::CreateVideo => {
                self.run_create_video();
            }
            Message::SelectVideo => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select Video")
                            .add_filter("Video Files", &["mp4", "avi", "mov", "mkv"])
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::VideoSelected,
                );
            }
            Message::VideoSelected(Some(path)) => {
                // Show the metadata report as soon as a video is chosen.
                let mut probe = ProbeVideoUseCase::new(Box::new(FfmpegReader::new()));
                self.probe = Some(probe.execute(&path).map_err(|e| e.to_string()));
                self.session.video_input = Some(path);
                self.extract_feedback = None;
            }
            Message::VideoSelected(None) => {}
            Message::SelectExtractFolder => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select Destination Folder")
                            .pick_folder()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::ExtractFolderSelected,
                );
            }
            Message::ExtractFolderSelected(Some(path)) => {
                self.session.extract_dir = Some(path);
                self.extract_feedback = None;
            }
            Message::ExtractFolderSelected(None) => {}
            Message::ExtractImages => {
                self.run_extract_images();
            }
            Message::ShowExtractFolder => {
                if let Some(dir) = &self.session.extract_dir {
                    let _ = open::that(dir);
                }
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    /// Runs the image-sequence → video conversion on the calling thread.
    /// The window is unresponsive for the duration; there is no progress
    /// reporting and no cancellation.
    fn run_create_video(&mut self) {
        let (Some(input_dir), Some(output)) = (
            self.session.image_dir.clone(),
            self.session.video_output.clone(),
        ) else {
            return;
        };

        let mut use_case = BuildVideoUseCase::new(
            Box::new(ImageFileReader::new()),
            Box::new(FfmpegWriter::new()),
        );

        self.create_feedback = Some(
            match use_case.execute(&input_dir, &output, self.session.fps) {
                Ok(BuildOutcome::NoImages) => {
                    Feedback::Notice("No images found in the selected folder.".to_string())
                }
                Ok(BuildOutcome::Written { frames }) => Feedback::Success(format!(
                    "Video has been created ({frames} frames at {} fps).",
                    self.session.fps
                )),
                Err(e) => {
                    log::error!("Creating video failed: {e}");
                    Feedback::Error(e.to_string())
                }
            },
        );
    }

    /// Runs the video → image-sequence extraction, blocking like
    /// `run_create_video`.
    fn run_extract_images(&mut self) {
        let (Some(input), Some(output_dir)) = (
            self.session.video_input.clone(),
            self.session.extract_dir.clone(),
        ) else {
            return;
        };

        let mut use_case = ExtractFramesUseCase::new(
            Box::new(FfmpegReader::new()),
            Box::new(ImageFileWriter::new()),
        );

        self.extract_feedback = Some(match use_case.execute(&input, &output_dir) {
            Ok(count) => Feedback::Success(format!("{count} images extracted.")),
            Err(e) => {
                log::error!("Extracting images failed: {e}");
                Feedback::Error(e.to_string())
            }
        });
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;

        // Tab bar
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let theme = self.theme();
        let content: Element<'_, Message> = match self.active_tab {
            Tab::CreateVideo => tabs::create_tab::view(self, &theme),
            Tab::ExtractImages => tabs::extract_tab::view(self, &theme),
            Tab::Appearance => tabs::appearance_tab::view(&self.settings),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.settings.appearance == Appearance::System {
            iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme)
        } else {
            Subscription::none()
        }
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
