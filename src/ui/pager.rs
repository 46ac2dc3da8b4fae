//! Page navigation bar shown under the artworks table
//!
//! Works from the same inputs as a classic paginator widget: the offset of
//! the first displayed record, rows per page and the total record count.

use iced::widget::{button, text, Row};
use iced::{Alignment, Element};

use crate::Message;

/// Number of numbered page buttons shown at once
const PAGE_LINK_COUNT: u32 = 5;

/// Page links and button states for one pager render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerModel {
    /// Zero-based page currently displayed
    pub current: u32,
    /// Number of pages the total record count spans (never 0)
    pub page_count: u32,
    /// Zero-based indices of the numbered page buttons, ascending
    pub links: Vec<u32>,
}

impl PagerModel {
    pub fn new(first: u64, rows: usize, total_records: u64) -> Self {
        let rows = rows.max(1) as u64;
        let current = u32::try_from(first / rows).unwrap_or(u32::MAX);
        let page_count = u32::try_from(total_records.div_ceil(rows))
            .unwrap_or(u32::MAX)
            .max(1);

        // Center the window on the current page, then slide it back inside [0, page_count)
        let last = page_count - 1;
        let half = PAGE_LINK_COUNT / 2;
        let end = current.saturating_add(half).max(PAGE_LINK_COUNT - 1).min(last);
        let start = end.saturating_sub(PAGE_LINK_COUNT - 1);

        Self {
            current,
            page_count,
            links: (start..=end).collect(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current < self.last_page()
    }

    pub fn last_page(&self) -> u32 {
        self.page_count - 1
    }
}

/// Render the pager as a row of buttons
pub fn view<'a>(model: PagerModel) -> Element<'a, Message> {
    let nav = |label: &'a str, target: u32, enabled: bool| {
        button(text(label))
            .style(button::secondary)
            .padding([4, 10])
            .on_press_maybe(enabled.then_some(Message::PageChanged(target)))
    };

    let mut bar: Row<'a, Message> = Row::new()
        .spacing(4)
        .align_y(Alignment::Center)
        .push(nav("«", 0, model.has_previous()))
        .push(nav("‹", model.current.saturating_sub(1), model.has_previous()));

    for &page in &model.links {
        let style = if page == model.current {
            button::primary
        } else {
            button::text
        };
        bar = bar.push(
            button(text((page as u64 + 1).to_string()))
                .style(style)
                .padding([4, 10])
                .on_press_maybe((page != model.current).then_some(Message::PageChanged(page))),
        );
    }

    let next = model.current.saturating_add(1);
    let last = model.last_page();
    bar = bar
        .push(nav("›", next, model.has_next()))
        .push(nav("»", last, model.has_next()));

    bar.into()
}
