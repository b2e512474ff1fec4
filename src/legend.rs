use crate::dom::{Document, NodeId};
use crate::level::describe;
use crate::models::DisplayEvent;
use crate::square::{SQUARE_CLASS, attach_display_listener};
use tracing::warn;

pub const LEGEND_LIST_CLASS: &str = "examples__list";

#[derive(Debug, Default)]
pub struct Legend {
    swatches: Vec<(u8, NodeId)>,
}

impl Legend {
    pub fn markup(doc: &mut Document) -> NodeId {
        let section = doc.create_element("div");
        doc.add_class(section, "examples");

        let less = doc.create_element("span");
        doc.set_text(less, "Less");
        doc.append(section, less);

        let list = doc.create_element("ul");
        doc.add_class(list, LEGEND_LIST_CLASS);
        for level in 0..5u8 {
            let swatch = doc.create_element("li");
            doc.add_class(swatch, SQUARE_CLASS);
            doc.set_attribute(swatch, "data-color", level.to_string());
            doc.set_attribute(swatch, "tabindex", "0");
            doc.set_attribute(swatch, "aria-label", format!("{} contributions", describe(level)));
            doc.append(list, swatch);
        }
        doc.append(section, list);

        let more = doc.create_element("span");
        doc.set_text(more, "More");
        doc.append(section, more);
        section
    }

    pub fn attach(doc: &mut Document, scope: NodeId) -> Self {
        let mut swatches = Vec::new();
        for list in doc.query_class(scope, LEGEND_LIST_CLASS) {
            for swatch in doc.query_class(list, SQUARE_CLASS) {
                let Some(level) = doc.attribute(swatch, "data-color").and_then(|v| v.parse::<u8>().ok()) else {
                    warn!("legend swatch without a numeric data-color");
                    continue;
                };
                attach_display_listener(doc, swatch, DisplayEvent::new(describe(level), ""));
                swatches.push((level, swatch));
            }
        }
        Self { swatches }
    }

    pub fn swatch(&self, level: u8) -> Option<NodeId> {
        self.swatches
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, node)| *node)
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}
