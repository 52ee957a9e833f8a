use html_pdf_converter::{app, config::AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "html_pdf_converter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        base_url = %config.api.base_url,
        auto_download = config.auto_download,
        "Starting HTML to PDF converter"
    );

    iced::application(
        move || app::ConverterApp::boot(config.clone()),
        app::update,
        app::view,
    )
    .title("HTML to PDF Converter")
    .run()
}
