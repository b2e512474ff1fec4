use crate::dates::{display_format, iso_format};
use crate::dom::{CLICK, Document, Event, NodeId};
use crate::level::ContributionLevel;
use crate::models::DisplayEvent;
use chrono::NaiveDate;

pub const SQUARE_CLASS: &str = "square";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u64,
    pub level: ContributionLevel,
}

impl DayCell {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self {
            date,
            count,
            level: ContributionLevel::classify(count),
        }
    }

    pub fn iso_date(&self) -> String {
        iso_format(self.date)
    }

    pub fn aria_label(&self) -> String {
        format!(
            "{} contributions, {}",
            self.level.description(),
            display_format(self.date)
        )
    }

    pub fn display_event(&self) -> DisplayEvent {
        let contribution_count = if self.count == 0 {
            self.level.description().to_string()
        } else {
            self.count.to_string()
        };
        DisplayEvent::new(contribution_count, &self.iso_date())
    }

    pub fn render(&self, doc: &mut Document) -> NodeId {
        let node = doc.create_element("li");
        doc.add_class(node, SQUARE_CLASS);
        doc.set_attribute(node, "data-color", self.level.as_u8().to_string());
        doc.set_attribute(node, "data-date", self.iso_date());
        doc.set_attribute(node, "tabindex", "0");
        doc.set_attribute(node, "aria-label", self.aria_label());
        attach_display_listener(doc, node, self.display_event());
        node
    }
}

pub fn attach_display_listener(doc: &mut Document, node: NodeId, detail: DisplayEvent) {
    doc.add_event_listener(node, CLICK, move |doc: &mut Document, _: &Event, current: NodeId| {
        doc.dispatch(Event::tooltip_show(current, detail.clone()));
    });
}
