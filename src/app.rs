use std::path::PathBuf;

use iced::Task;

use crate::api::ApiClient;
use crate::application::{file_dialogs, ConversionClient, ConversionOutcome, HealthReport};
use crate::config::AppConfig;
use crate::domain::{AppError, SelectedFile};
use crate::ui::{self, ConverterMessage};

pub struct ConverterApp {
    client: ConversionClient,
    config: AppConfig,
}

impl ConverterApp {
    /// Build the window state and fire the startup health probe.
    pub fn boot(config: AppConfig) -> (Self, Task<Message>) {
        let mut client = ConversionClient::new(ApiClient::new(config.api.clone()));
        let probe = client.begin_health_check();

        (
            Self { client, config },
            Task::perform(probe.run(), Message::HealthChecked),
        )
    }

    pub fn client(&self) -> &ConversionClient {
        &self.client
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(ConverterMessage),
    /// `Ok(None)` when the picker was dismissed
    FilePicked(Result<Option<SelectedFile>, AppError>),
    HealthChecked(HealthReport),
    ConversionFinished(ConversionOutcome),
    /// `Ok(None)` when the save dialog was dismissed
    DownloadSaved(Result<Option<PathBuf>, AppError>),
}

pub fn update(app: &mut ConverterApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => match ui_msg {
            ConverterMessage::BrowsePressed => {
                return Task::perform(file_dialogs::pick_html_file(), Message::FilePicked);
            }
            ConverterMessage::ResetPressed => app.client.reset(),
            ConverterMessage::CheckHealthPressed => {
                let probe = app.client.begin_health_check();
                return Task::perform(probe.run(), Message::HealthChecked);
            }
            ConverterMessage::ConvertPressed => {
                // Validation failures are already on the status line
                if let Ok(job) = app.client.begin_conversion() {
                    return Task::perform(job.run(), Message::ConversionFinished);
                }
            }
            ConverterMessage::SavePressed => return save_download(app),
        },
        Message::FilePicked(result) => match result {
            Ok(Some(file)) => app.client.select_file(Some(file)),
            Ok(None) => {}
            Err(e) => app.client.report_error(&e),
        },
        Message::HealthChecked(report) => {
            app.client.finish_health_check(report);
        }
        Message::ConversionFinished(outcome) => {
            if app.client.finish_conversion(outcome) && app.config.auto_download {
                return save_download(app);
            }
        }
        Message::DownloadSaved(result) => match result {
            Ok(Some(path)) => app.client.record_saved(&path),
            Ok(None) => {}
            Err(e) => app.client.report_error(&e),
        },
    }
    Task::none()
}

pub fn view(app: &ConverterApp) -> iced::Element<'_, Message> {
    ui::view(&app.client).map(Message::UiMessage)
}

fn save_download(app: &ConverterApp) -> Task<Message> {
    let Some(resource) = app.client.download() else {
        return Task::none();
    };

    Task::perform(
        file_dialogs::save_download(
            resource.path().to_path_buf(),
            app.client.suggested_pdf_name(),
        ),
        Message::DownloadSaved,
    )
}
