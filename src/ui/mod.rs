use iced::{
    widget::{button, column, row, text, Space},
    Element, Length,
};

use crate::application::ConversionClient;
use crate::domain::{HealthState, StatusKind};

#[derive(Debug, Clone)]
pub enum ConverterMessage {
    BrowsePressed,
    ConvertPressed,
    ResetPressed,
    CheckHealthPressed,
    SavePressed,
}

/// Render the converter window from the client's current state.
pub fn view(client: &ConversionClient) -> Element<'_, ConverterMessage> {
    let health_label = text(client.health().label()).size(14);
    let health_label = match client.health() {
        HealthState::Online => health_label.style(text::success),
        HealthState::Offline | HealthState::UnexpectedResponse => {
            health_label.style(text::danger)
        }
        HealthState::Unknown | HealthState::Checking => health_label,
    };

    let status = text(&client.status().message).size(14);
    let status = match client.status().kind {
        StatusKind::Success => status.style(text::success),
        StatusKind::Error => status.style(text::danger),
        StatusKind::Neutral => status,
    };

    let convert_label = if client.is_submitting() {
        "Converting..."
    } else {
        "Convert to PDF"
    };

    let mut content = column![
        text("HTML to PDF").size(32),
        row![
            text("Service:").size(14),
            text(client.base_url()).size(14),
            health_label,
            button("Check")
                .on_press(ConverterMessage::CheckHealthPressed)
                .padding([4, 12]),
        ]
        .spacing(10),
        Space::new().height(Length::Fixed(20.0)),
        row![
            button("Choose file...")
                .on_press(ConverterMessage::BrowsePressed)
                .padding([10, 20]),
            text(client.file_label()).size(16),
            text(client.size_label()).size(16),
        ]
        .spacing(10),
        Space::new().height(Length::Fixed(10.0)),
        row![
            button(convert_label)
                .on_press_maybe(client.can_submit().then_some(ConverterMessage::ConvertPressed))
                .padding([10, 20]),
            button("Reset")
                .on_press(ConverterMessage::ResetPressed)
                .padding([10, 20]),
        ]
        .spacing(10),
        status,
    ]
    .padding(20)
    .spacing(10);

    if let Some(resource) = client.download() {
        content = content.push(
            row![
                text(resource.url().as_str()).size(12),
                button("Save PDF")
                    .on_press(ConverterMessage::SavePressed)
                    .padding([6, 16]),
            ]
            .spacing(10),
        );
    }

    content.into()
}
