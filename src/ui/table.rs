//! Artworks table
//!
//! One row per artwork on the current page with a selection checkbox,
//! a header checkbox for the whole page, and the pager underneath.
//! While a page is loading the rows are replaced by a spinner.

use iced::widget::{checkbox, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Spinner;

use super::pager::{self, PagerModel};
use crate::state::data::Artwork;
use crate::state::selection::SelectionStore;
use crate::Message;

/// Everything the table needs for one render
pub struct TableProps<'a> {
    pub artworks: &'a [Artwork],
    pub loading: bool,
    pub selection: &'a SelectionStore,
    pub first: u64,
    pub page_size: usize,
    pub total_records: u64,
}

/// Relative widths of the data columns: Title, Origin, Artist, Inscriptions, Start, End
const COLUMN_PORTIONS: [u16; 6] = [4, 2, 4, 3, 1, 1];
const CHECKBOX_WIDTH: f32 = 32.0;
const SPINNER_SIZE: f32 = 40.0;

/// Build the table with its pager
pub fn view<'a>(props: TableProps<'a>) -> Element<'a, Message> {
    let header = header_row(props.selection.all_selected(props.artworks));

    let body: Element<'a, Message> = if props.loading {
        let spinner = Spinner::new()
            .width(Length::Fixed(SPINNER_SIZE))
            .height(Length::Fixed(SPINNER_SIZE));

        container(spinner)
            .width(Length::Fill)
            .padding(24)
            .center_x(Length::Fill)
            .into()
    } else {
        Column::with_children(
            props
                .artworks
                .iter()
                .map(|art| artwork_row(art, props.selection.is_selected(art.id))),
        )
        .spacing(2)
        .into()
    };

    let pager = PagerModel::new(props.first, props.page_size, props.total_records);

    column![
        header,
        horizontal_rule(1),
        body,
        container(pager::view(pager))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([12, 0]),
    ]
    .spacing(6)
    .into()
}

fn header_row<'a>(all_selected: bool) -> Element<'a, Message> {
    let labels = ["Title", "Origin", "Artist", "Inscriptions", "Start", "End"];

    let mut header: Row<'a, Message> = Row::new()
        .spacing(10)
        .padding([6, 8])
        .align_y(Alignment::Center)
        .push(
            container(checkbox("", all_selected).on_toggle(Message::TogglePage))
                .width(Length::Fixed(CHECKBOX_WIDTH)),
        );

    for (label, portion) in labels.into_iter().zip(COLUMN_PORTIONS) {
        header = header.push(text(label).size(15).width(Length::FillPortion(portion)));
    }

    header.into()
}

fn artwork_row(art: &Artwork, selected: bool) -> Element<'_, Message> {
    let id = art.id;
    let year = |value: Option<i32>| value.map(|y| y.to_string()).unwrap_or_default();

    let cells = [
        art.title.clone(),
        art.place_of_origin.clone().unwrap_or_default(),
        art.artist_display.clone().unwrap_or_default(),
        art.inscriptions.clone().unwrap_or_default(),
        year(art.date_start),
        year(art.date_end),
    ];

    let toggle = checkbox("", selected).on_toggle(move |_| Message::ToggleRow(id));

    let mut line: Row<'_, Message> = row![container(toggle).width(Length::Fixed(CHECKBOX_WIDTH))]
        .spacing(10)
        .align_y(Alignment::Center);

    for (value, portion) in cells.into_iter().zip(COLUMN_PORTIONS) {
        line = line.push(text(value).size(14).width(Length::FillPortion(portion)));
    }

    let highlight = move |theme: &Theme| {
        if selected {
            container::Style {
                background: Some(theme.extended_palette().primary.weak.color.into()),
                ..container::Style::default()
            }
        } else {
            container::Style::default()
        }
    };

    container(line).padding([6, 8]).style(highlight).into()
}
