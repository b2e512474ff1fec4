use crate::data::DataService;
use crate::dom::{Document, Event, NodeId};
use crate::grid::CalendarGrid;
use crate::legend::Legend;
use crate::models::ContributionData;
use crate::tooltip::Tooltip;
use chrono::{Duration, NaiveDate};
use tracing::{debug, info, warn};

pub const WINDOW_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Date(NaiveDate),
    Level(u8),
}

pub struct CalendarApp {
    document: Document,
    squares: NodeId,
    months: NodeId,
    loader: Option<NodeId>,
    tooltip: Tooltip,
    legend: Legend,
    grid: CalendarGrid,
}

impl Default for CalendarApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarApp {
    pub fn new() -> Self {
        let mut document = Document::new("div");
        let root = document.root();
        document.add_class(root, "calendar");

        let months = document.create_element("ul");
        document.add_class(months, "months");
        document.append(root, months);

        let squares = document.create_element("ul");
        document.add_class(squares, "squares");
        document.append(root, squares);

        let loader = document.create_element("div");
        document.add_class(loader, "loader");
        document.set_text(loader, "Loading…");
        document.append(root, loader);

        let legend = Legend::markup(&mut document);
        document.append(root, legend);

        let tooltip = Tooltip::install(&mut document);
        let legend = Legend::attach(&mut document, root);
        if legend.is_empty() {
            warn!("page has no legend swatches");
        } else {
            debug!(swatches = legend.len(), "legend attached");
        }

        Self {
            document,
            squares,
            months,
            loader: Some(loader),
            tooltip,
            legend,
            grid: CalendarGrid::default(),
        }
    }

    pub fn window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today - Duration::days(WINDOW_DAYS), today)
    }

    pub fn on_data_loaded(&mut self, today: NaiveDate, data: &ContributionData) {
        self.remove_loader();
        self.create_calendar(today, data);
    }

    fn remove_loader(&mut self) {
        if let Some(loader) = self.loader.take() {
            self.document.remove(loader);
        }
    }

    pub fn create_calendar(&mut self, today: NaiveDate, data: &ContributionData) {
        self.tooltip.hide(&mut self.document);
        self.document.clear(self.squares);
        self.document.clear(self.months);

        let (start, end) = Self::window(today);
        self.grid = CalendarGrid::create(
            &mut self.document,
            self.squares,
            self.months,
            today,
            start,
            end,
            data,
        );
        info!(%start, %end, "calendar created");
    }

    pub fn click(&mut self, node: NodeId) {
        self.document.dispatch(Event::click(node));
    }

    pub fn click_outside(&mut self) {
        let root = self.document.root();
        self.click(root);
    }

    pub fn select(&mut self, selection: Selection) -> bool {
        let node = match selection {
            Selection::Date(date) => self.grid.node_for(date),
            Selection::Level(level) => self.legend.swatch(level),
        };
        match node {
            Some(node) => {
                self.click(node);
                true
            }
            None => {
                debug!(?selection, "nothing to select");
                false
            }
        }
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    pub fn render(&self) -> String {
        self.document.render(self.document.root())
    }
}

pub async fn load_and_render(service: &DataService, today: NaiveDate, selection: Option<Selection>) -> String {
    let data = service.fetch_contribution_data().await;
    render_calendar(today, &data, selection)
}

pub fn render_calendar(today: NaiveDate, data: &ContributionData, selection: Option<Selection>) -> String {
    let mut app = CalendarApp::new();
    app.on_data_loaded(today, data);
    if let Some(selection) = selection {
        app.select(selection);
    }
    app.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn loaded(data: &ContributionData) -> CalendarApp {
        let mut app = CalendarApp::new();
        assert!(app.is_loading());
        app.on_data_loaded(today(), data);
        app
    }

    #[test]
    fn loads_full_window_and_drops_loader() {
        let app = loaded(&ContributionData::new());
        assert!(!app.is_loading());
        assert_eq!(app.grid().cells.len(), WINDOW_DAYS as usize + 1);
        assert_eq!(app.grid().months.len(), 12);
        assert!(app.grid().cells.iter().all(|c| c.count == 0));
        assert!(app.document().query_class(app.document().root(), "loader").is_empty());
        assert_eq!(app.grid().cells.last().map(|c| c.date), Some(today()));
    }

    #[test]
    fn tooltip_follows_selection() {
        let mut data = ContributionData::new();
        data.insert("2024-06-14".into(), 22);
        let mut app = loaded(&data);
        let yesterday = today().pred_opt().unwrap();
        let a = app.grid().node_for(yesterday).unwrap();
        let b = app.grid().node_for(today()).unwrap();

        assert!(app.select(Selection::Date(yesterday)));
        assert!(app.tooltip().is_active(a));
        assert!(app.render().contains("22 contributions"));

        assert!(app.select(Selection::Date(today())));
        assert!(app.tooltip().is_active(b));
        assert!(!app.render().contains("22 contributions"));

        app.click_outside();
        assert_eq!(app.tooltip().active_container(), None);
        assert!(!app.render().contains("class=\"tooltip\""));
    }

    #[test]
    fn legend_selection_and_unknown_date() {
        let mut app = loaded(&ContributionData::new());
        assert!(app.select(Selection::Level(2)));
        assert!(app.render().contains("10-19 contributions</p></div>"));

        let outside = today() + Duration::days(1);
        assert!(!app.select(Selection::Date(outside)));
        assert!(!app.select(Selection::Level(9)));
    }

    #[test]
    fn rebuilding_replaces_grid() {
        let mut app = loaded(&ContributionData::new());
        app.select(Selection::Date(today()));
        let mut data = ContributionData::new();
        data.insert("2024-06-15".into(), 40);
        app.create_calendar(today(), &data);

        let squares = app.document().query_class(app.document().root(), "squares")[0];
        assert_eq!(app.document().children(squares).len(), WINDOW_DAYS as usize + 1);
        assert_eq!(app.tooltip().active_container(), None);
        assert_eq!(app.grid().cells.last().map(|c| c.count), Some(40));
    }

    #[test]
    fn render_calendar_marks_selected_day() {
        let mut data = ContributionData::new();
        data.insert("2024-06-15".into(), 5);
        let html = render_calendar(today(), &data, Some(Selection::Date(today())));
        assert!(html.starts_with("<div class=\"calendar\">"));
        assert!(html.contains("<time class=\"tooltip__date\" datetime=\"2024-06-15\">Saturday, June 15, 2024</time>"));
        assert_eq!(html.matches("class=\"month\"").count(), 12);
    }
}
