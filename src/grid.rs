use crate::dates::{LOCAL_MONTHS, generate_range, iso_format};
use crate::dom::{Document, NodeId};
use crate::models::ContributionData;
use crate::square::DayCell;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

pub const MONTHS_SHOWN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub month_index: u32,
}

impl MonthLabel {
    pub fn name(self) -> &'static str {
        LOCAL_MONTHS[self.month_index as usize % 12]
    }
}

pub fn cells_for_range(start: NaiveDate, end: NaiveDate, data: &ContributionData) -> Vec<DayCell> {
    generate_range(start, end)
        .map(|date| {
            let count = data.get(&iso_format(date)).copied().unwrap_or(0);
            DayCell::new(date, count)
        })
        .collect()
}

pub fn month_labels(today: NaiveDate, count: usize) -> Vec<MonthLabel> {
    let current = i64::from(today.month0());
    (0..count as i64)
        .rev()
        .map(|back| MonthLabel {
            month_index: (current - back).rem_euclid(12) as u32,
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CalendarGrid {
    pub cells: Vec<DayCell>,
    pub months: Vec<MonthLabel>,
    elements: HashMap<NodeId, usize>,
    by_date: HashMap<NaiveDate, NodeId>,
}

impl CalendarGrid {
    /// Appends one square per day into `squares` and one marker per month
    /// into `months`. Existing children are kept; clear the containers first
    /// when re-rendering.
    pub fn create(
        doc: &mut Document,
        squares: NodeId,
        months: NodeId,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        data: &ContributionData,
    ) -> Self {
        let labels = month_labels(today, MONTHS_SHOWN);
        for label in labels.iter().rev() {
            let node = doc.create_element("li");
            doc.add_class(node, "month");
            doc.set_text(node, label.name());
            doc.prepend(months, node);
        }

        let cells = cells_for_range(start, end, data);
        let mut elements = HashMap::with_capacity(cells.len());
        let mut by_date = HashMap::with_capacity(cells.len());
        for (index, cell) in cells.iter().enumerate() {
            let node = cell.render(doc);
            doc.append(squares, node);
            elements.insert(node, index);
            by_date.insert(cell.date, node);
        }

        debug!(days = cells.len(), months = labels.len(), "calendar grid created");
        Self {
            cells,
            months: labels,
            elements,
            by_date,
        }
    }

    pub fn cell_for(&self, node: NodeId) -> Option<&DayCell> {
        self.elements.get(&node).map(|index| &self.cells[*index])
    }

    pub fn node_for(&self, date: NaiveDate) -> Option<NodeId> {
        self.by_date.get(&date).copied()
    }
}
