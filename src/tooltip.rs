use crate::dom::{CLICK, Document, Event, EventKind, NodeId, TOOLTIP_SHOW};
use crate::models::DisplayEvent;
use crate::square::SQUARE_CLASS;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TooltipState {
    container: Option<NodeId>,
    element: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    state: Rc<RefCell<TooltipState>>,
}

impl Tooltip {
    pub fn install(doc: &mut Document) -> Self {
        let tooltip = Self::default();
        let root = doc.root();

        let on_show = tooltip.clone();
        doc.add_event_listener(root, TOOLTIP_SHOW, move |doc: &mut Document, event: &Event, _: NodeId| {
            if let EventKind::TooltipShow(detail) = &event.kind {
                on_show.show(doc, event.target, detail);
            }
        });

        let on_click = tooltip.clone();
        doc.add_event_listener(root, CLICK, move |doc: &mut Document, event: &Event, _: NodeId| {
            if doc.closest(event.target, SQUARE_CLASS).is_none() {
                on_click.hide(doc);
            }
        });

        tooltip
    }

    /// Shows `data` inside `container`, replacing any other tooltip. Showing
    /// again for the active container leaves it untouched and returns `None`.
    pub fn show(&self, doc: &mut Document, container: NodeId, data: &DisplayEvent) -> Option<NodeId> {
        if self.active_container() == Some(container) {
            return None;
        }
        self.hide(doc);

        let node = tooltip_markup(doc, data);
        doc.append(container, node);
        *self.state.borrow_mut() = TooltipState {
            container: Some(container),
            element: Some(node),
        };
        debug!(datetime = %data.datetime, "tooltip shown");
        Some(node)
    }

    pub fn hide(&self, doc: &mut Document) {
        let previous = std::mem::take(&mut *self.state.borrow_mut());
        if let Some(element) = previous.element {
            doc.remove(element);
            debug!("tooltip hidden");
        }
    }

    pub fn active_container(&self) -> Option<NodeId> {
        self.state.borrow().container
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.state.borrow().element
    }

    pub fn is_active(&self, container: NodeId) -> bool {
        self.active_container() == Some(container)
    }
}

fn tooltip_markup(doc: &mut Document, data: &DisplayEvent) -> NodeId {
    let tooltip = doc.create_element("div");
    doc.add_class(tooltip, "tooltip");

    let text = doc.create_element("p");
    doc.add_class(text, "tooltip__text");
    doc.set_text(text, format!("{} contributions", data.contribution_count));
    doc.append(tooltip, text);

    if !data.date.is_empty() {
        let time = doc.create_element("time");
        doc.add_class(time, "tooltip__date");
        doc.set_attribute(time, "datetime", data.datetime.as_str());
        doc.set_text(time, data.date.as_str());
        doc.append(tooltip, time);
    }

    tooltip
}
