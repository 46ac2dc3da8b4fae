//! Side panel listing every selected artwork
//!
//! Also hosts the "Select first N rows" control for the current page.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::state::selection::SelectionStore;
use crate::Message;

/// Max height of the selected list before it scrolls
const LIST_HEIGHT: f32 = 300.0;

/// Turn the raw "select first N" input into a row count
///
/// The input is free text and is only interpreted on submit:
/// negative numbers and anything that isn't an integer count as 0.
pub fn parse_row_count(input: &str) -> usize {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

/// Build the selection panel
pub fn view<'a>(selection: &'a SelectionStore, rows_to_select: &'a str) -> Element<'a, Message> {
    let heading = text(format!("Selected Artworks ({})", selection.len())).size(18);

    let list: Element<'a, Message> = if selection.is_empty() {
        text("No rows selected").into()
    } else {
        let items: Column<'a, Message> = Column::with_children(selection.values().map(|art| {
            row![
                text(art.title.as_str()).width(Length::Fill),
                button(text("Remove").size(13))
                    .style(button::danger)
                    .padding([2, 6])
                    .on_press(Message::RemoveSelected(art.id)),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
        }))
        .spacing(4);

        scrollable(items).height(Length::Fixed(LIST_HEIGHT)).into()
    };

    let select_first = row![
        text("Select first"),
        text_input("0", rows_to_select)
            .on_input(Message::RowsToSelectChanged)
            .on_submit(Message::SelectFirstRows)
            .width(Length::Fixed(60.0)),
        text("rows"),
        button("Submit")
            .style(button::success)
            .on_press(Message::SelectFirstRows),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(column![heading, list, select_first].spacing(12))
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
