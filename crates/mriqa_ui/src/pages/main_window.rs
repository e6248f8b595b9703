//! Main window view.
//!
//! Layout mirrors the original client: folder selection on top, the submit
//! and download actions, the metrics table, the ROI overlay image, a log
//! pane, and a status bar at the bottom.

use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, image, row, scrollable, space, text, text_input,
};
use iced::{Element, Length};

use mriqa_core::format::format_metric;
use mriqa_core::models::{MetricRow, METRIC_COLUMNS};

use crate::app::{App, Message};
use crate::theme::{self, colors, font, spacing};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let mut content = column![
        header_row(app),
        space::vertical().height(spacing::MD),
        selection_section(app),
        space::vertical().height(spacing::MD),
        actions_row(app),
    ]
    .spacing(spacing::XS)
    .padding(spacing::LG);

    // Results, overlay and downloads only exist after a successful run.
    if !app.results.is_empty() {
        content = content
            .push(space::vertical().height(spacing::MD))
            .push(results_section(app));
    }
    if let Some(handle) = &app.overlay {
        content = content
            .push(space::vertical().height(spacing::MD))
            .push(overlay_section(handle));
    }

    let content = content
        .push(space::vertical().height(spacing::MD))
        .push(log_section(app))
        .push(status_bar(app));

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header_row(app: &App) -> Element<'_, Message> {
    let backend_status = match app.backend_reachable {
        None => "Checking backend...",
        Some(true) => "Backend online",
        Some(false) => "Backend unreachable",
    };

    row![
        text("MRI DICOM Analysis").size(font::LG),
        space::horizontal(),
        text(backend_status)
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center)
    .into()
}

/// Folder picker row with the staged file count.
fn selection_section(app: &App) -> Element<'_, Message> {
    let file_count = if app.selection.is_empty() {
        "No files staged".to_string()
    } else {
        format!("{} files staged", app.selection.len())
    };

    let picker_row = row![
        text("Scan folder:")
            .size(font::NORMAL)
            .width(Length::Fixed(100.0)),
        text_input("No folder selected", &app.folder_path)
            .size(font::NORMAL)
            .width(Length::Fill),
        button(text("Browse").size(font::SM))
            .on_press_maybe((!app.is_busy).then_some(Message::BrowseFolder))
            .padding([spacing::XS, spacing::SM]),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let content = column![
        picker_row,
        text(file_count)
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::XS);

    container(content)
        .style(theme::card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// Submit and download buttons.
fn actions_row(app: &App) -> Element<'_, Message> {
    let submit = button(
        text(if app.is_busy {
            "Processing..."
        } else {
            "Upload & Analyze"
        })
        .size(font::NORMAL),
    )
    .on_press_maybe(app.can_submit().then_some(Message::RunAnalysis))
    .padding([spacing::SM, spacing::XL]);

    let mut actions = row![submit].spacing(spacing::SM).align_y(Vertical::Center);

    if !app.results.is_empty() {
        actions = actions.push(space::horizontal());
        if app.excel_url.is_some() {
            actions = actions.push(
                button(text("Download Metrics").size(font::SM))
                    .on_press(Message::DownloadMetrics)
                    .padding([spacing::XS, spacing::SM]),
            );
        }
        if app.image_url.is_some() {
            actions = actions.push(
                button(text("Download Overlay").size(font::SM))
                    .on_press(Message::DownloadOverlay)
                    .padding([spacing::XS, spacing::SM]),
            );
        }
    }

    actions.into()
}

/// Metrics table, one row per analyzed slice.
fn results_section(app: &App) -> Element<'_, Message> {
    let header = row![text("Filename")
        .size(font::NORMAL)
        .width(Length::FillPortion(2))]
    .extend(METRIC_COLUMNS.iter().map(|name| {
        text(*name)
            .size(font::NORMAL)
            .width(Length::FillPortion(1))
            .into()
    }))
    .spacing(spacing::SM)
    .padding([spacing::XS, spacing::SM]);

    let mut table = column![container(header)
        .style(theme::table_header)
        .width(Length::Fill)]
    .spacing(1);

    for entry in &app.results {
        table = table.push(result_row(entry));
    }

    let content = column![text("Results").size(font::LG), table].spacing(spacing::SM);

    container(content)
        .style(theme::card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn result_row(entry: &MetricRow) -> Element<'_, Message> {
    row![text(&entry.filename)
        .size(font::NORMAL)
        .width(Length::FillPortion(2))]
    .extend(entry.values().iter().map(|value| {
        text(format_metric(value))
            .size(font::NORMAL)
            .width(Length::FillPortion(1))
            .into()
    }))
    .spacing(spacing::SM)
    .padding([spacing::XS, spacing::SM])
    .into()
}

/// ROI overlay image returned by the backend.
fn overlay_section(handle: &image::Handle) -> Element<'_, Message> {
    let content = column![
        text("ROI Overlay").size(font::LG),
        image(handle.clone()).width(Length::Fixed(480.0)),
    ]
    .spacing(spacing::SM);

    container(content)
        .style(theme::card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn log_section(app: &App) -> Element<'_, Message> {
    let log_content = text(&app.log_text).size(font::SM);

    let scroll = scrollable(
        container(log_content)
            .padding(spacing::SM)
            .width(Length::Fill),
    )
    .height(Length::Fixed(160.0));

    let content = column![text("Log").size(font::LG), scroll].spacing(spacing::SM);

    container(content)
        .style(theme::card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn status_bar(app: &App) -> Element<'_, Message> {
    row![
        text(&app.status_text).size(font::SM),
        space::horizontal(),
        text(format!("v{}", mriqa_core::version()))
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::MD)
    .align_y(Vertical::Center)
    .padding([spacing::SM, 0.0])
    .into()
}
