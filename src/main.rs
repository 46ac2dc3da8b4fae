use chrono::Local;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Task, Theme};

mod api;
mod config;
mod logging;
mod state;
mod ui;

use api::client::{CatalogClient, Page};
use config::AppConfig;
use state::data::Artwork;
use state::pagination::{PageRequest, Pagination};
use state::selection::SelectionStore;

/// Main application state
struct ArtworksExplorer {
    /// Client for the remote artworks catalog
    client: CatalogClient,
    /// Current page index, total count and loading flag
    pagination: Pagination,
    /// Artworks on the displayed page (kept on fetch failure)
    artworks: Vec<Artwork>,
    /// Artworks selected on any page
    selection: SelectionStore,
    /// Raw contents of the "select first N rows" input
    rows_to_select: String,
    /// Status message to display to the user
    status: String,
    dark_theme: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a page in the pager (zero-based)
    PageChanged(u32),
    /// Background fetch finished for the given page
    PageLoaded(PageRequest, Result<Page, String>),
    /// Row checkbox clicked
    ToggleRow(i64),
    /// Header checkbox clicked: select or clear the whole page
    TogglePage(bool),
    /// "Remove" pressed in the selection panel
    RemoveSelected(i64),
    RowsToSelectChanged(String),
    /// "Submit" pressed next to the row count input
    SelectFirstRows,
}

impl ArtworksExplorer {
    /// Create a new instance of the application and load the first page
    fn new(client: CatalogClient, dark_theme: bool) -> (Self, Task<Message>) {
        let mut app = ArtworksExplorer {
            client,
            pagination: Pagination::new(),
            artworks: Vec::new(),
            selection: SelectionStore::new(),
            rows_to_select: String::from("0"),
            status: String::from("Loading..."),
            dark_theme,
        };

        let task = app.load_page(0);
        (app, task)
    }

    /// Switch to a page and start fetching it
    fn load_page(&mut self, page_index: u32) -> Task<Message> {
        let request = self.pagination.go_to_page(page_index);
        let client = self.client.clone();

        Task::perform(
            async move {
                client
                    .fetch_page(request.page_index)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::PageLoaded(request, result),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageChanged(page_index) => {
                if page_index == self.pagination.page_index() {
                    return Task::none();
                }
                tracing::debug!(page_index, "page changed");
                self.load_page(page_index)
            }
            Message::PageLoaded(request, result) => {
                if !self.pagination.accept(&request) {
                    tracing::debug!(
                        stale = request.page_index,
                        current = self.pagination.page_index(),
                        "discarding response for a page no longer shown"
                    );
                    return Task::none();
                }

                let page_number = request.page_index as u64 + 1;
                match result {
                    Ok(page) => {
                        tracing::info!(
                            page = page_number,
                            count = page.artworks.len(),
                            total = page.total_records,
                            "loaded artworks"
                        );
                        self.pagination.set_total_records(page.total_records);
                        self.artworks = page.artworks;
                        self.status = format!(
                            "Page {} loaded at {}",
                            page_number,
                            Local::now().format("%H:%M:%S")
                        );
                    }
                    Err(e) => {
                        // Previous rows and total stay on screen
                        tracing::error!(page = page_number, "failed to load artworks: {}", e);
                    }
                }
                Task::none()
            }
            Message::ToggleRow(id) => {
                if let Some(art) = self.artworks.iter().find(|art| art.id == id) {
                    self.selection.toggle(art);
                }
                Task::none()
            }
            Message::TogglePage(checked) => {
                self.selection.set_membership(&self.artworks, checked);
                Task::none()
            }
            Message::RemoveSelected(id) => {
                self.selection.remove(id);
                Task::none()
            }
            Message::RowsToSelectChanged(value) => {
                self.rows_to_select = value;
                Task::none()
            }
            Message::SelectFirstRows => {
                let n = ui::selection_panel::parse_row_count(&self.rows_to_select);
                self.selection.select_first_n(&self.artworks, n);
                tracing::debug!(requested = n, selected = self.selection.len(), "select first rows");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Artworks Explorer").size(32),
            text("Data from Art Institute of Chicago API").size(14),
            text(&self.status).size(12),
        ]
        .spacing(4);

        let table = ui::table::view(ui::table::TableProps {
            artworks: &self.artworks,
            loading: self.pagination.is_loading(),
            selection: &self.selection,
            first: self.pagination.first(),
            page_size: self.pagination.page_size(),
            total_records: self.pagination.total_records(),
        });

        let panel = ui::selection_panel::view(&self.selection, &self.rows_to_select);

        let content = column![
            header,
            row![
                container(table).width(Length::FillPortion(3)),
                container(panel).width(Length::FillPortion(1)),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = AppConfig::load();
    let client = CatalogClient::new(&config.catalog)?;
    tracing::info!(base_url = %config.catalog.base_url, "starting artworks explorer");

    iced::application(
        "Artworks Explorer",
        ArtworksExplorer::update,
        ArtworksExplorer::view,
    )
    .theme(ArtworksExplorer::theme)
    .centered()
    .run_with(move || ArtworksExplorer::new(client, config.dark_theme))?;

    Ok(())
}
