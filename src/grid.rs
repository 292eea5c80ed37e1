//! Selectable grid widget.
//!
//! Lays a list of items out in fixed-width rows, toggles membership in a
//! bounded selection on click, and swaps each item's rendering between a
//! selected and an unselected strategy.

use crate::element::{generate_id, Element};
use crate::event::{Event, MouseButton};
use crate::types::{Align, Color, Justify, Size, Style};

/// One selectable unit of content: a unique id plus an opaque payload that
/// is handed to the render callbacks unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem<T> {
    pub id: String,
    pub data: T,
}

impl<T> GridItem<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

type RenderFn<T> = Box<dyn Fn(&GridItem<T>) -> Element>;
type SelectFn = Box<dyn FnMut(&[String])>;

/// Fixed base styling applied beneath caller overrides: the gray item box.
pub fn base_box_style() -> Style {
    Style::new().background(Color::rgb(0xad, 0xad, 0xad))
}

/// Default selected-state override: orange fill.
pub fn selected_box_style() -> Style {
    Style::new().background(Color::rgb(0xff, 0x66, 0x00))
}

fn default_label<T>(item: &GridItem<T>) -> Element {
    Element::text(item.id.clone()).style(Style::new().foreground(Color::rgb(255, 255, 255)))
}

/// A grid of clickable items with a bounded, insertion-ordered selection.
///
/// Items are chunked into rows of `max_per_row`; the last row may be short
/// and is not padded. Clicking an item toggles it: present ids are removed,
/// absent ids are appended while the selection is below `max_select`, and
/// clicks at capacity leave the selection unchanged. `on_select` fires once
/// per click with the post-toggle selection.
pub struct InteractiveGrid<T> {
    id: String,
    items: Vec<GridItem<T>>,
    selected: Vec<String>,
    max_per_row: usize,
    max_select: usize,
    row_height: u16,
    unselected_render: Option<RenderFn<T>>,
    selected_render: Option<RenderFn<T>>,
    unselected_style: Style,
    selected_style: Style,
    on_select: Option<SelectFn>,
}

impl<T> InteractiveGrid<T> {
    pub fn new(items: Vec<GridItem<T>>) -> Self {
        Self {
            id: generate_id("grid"),
            items,
            selected: Vec::new(),
            max_per_row: 2,
            max_select: 1,
            row_height: 5,
            unselected_render: None,
            selected_render: None,
            unselected_style: Style::default(),
            selected_style: selected_box_style(),
            on_select: None,
        }
    }

    // Configuration

    /// Override the auto-generated element id. Needed when more than one
    /// grid shares a tree, or when tests want stable cell ids.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Items per row (default 2).
    pub fn max_per_row(mut self, n: usize) -> Self {
        self.max_per_row = n;
        self
    }

    /// Upper bound on simultaneous selections (default 1).
    pub fn max_select(mut self, n: usize) -> Self {
        self.max_select = n;
        self
    }

    /// Height of each row in terminal cells (default 5). Terminal cells are
    /// not square, so the equal-aspect box becomes a fixed-height row.
    pub fn row_height(mut self, height: u16) -> Self {
        self.row_height = height;
        self
    }

    /// Initial selection, applied as given.
    pub fn default_selected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Render strategy for unselected items. Defaults to a centered label
    /// showing the item id.
    pub fn unselected_render(mut self, f: impl Fn(&GridItem<T>) -> Element + 'static) -> Self {
        self.unselected_render = Some(Box::new(f));
        self
    }

    /// Render strategy for selected items. Defaults to a centered label
    /// showing the item id.
    pub fn selected_render(mut self, f: impl Fn(&GridItem<T>) -> Element + 'static) -> Self {
        self.selected_render = Some(Box::new(f));
        self
    }

    /// Style override layered on unselected item boxes.
    pub fn unselected_style(mut self, style: Style) -> Self {
        self.unselected_style = style;
        self
    }

    /// Style override layered on selected item boxes. Defaults to
    /// [`selected_box_style`].
    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    /// Callback invoked with the full selection after every toggle,
    /// including toggles that leave the selection unchanged.
    pub fn on_select(mut self, f: impl FnMut(&[String]) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    // State

    pub fn items(&self) -> &[GridItem<T>] {
        &self.items
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected.iter().any(|id| id == item_id)
    }

    /// Replace the item list wholesale. The selection is deliberately left
    /// untouched; ids that no longer resolve to an item are logged and
    /// observable via [`has_phantom_selection`](Self::has_phantom_selection).
    pub fn set_items(&mut self, items: Vec<GridItem<T>>) {
        self.items = items;

        let stale: Vec<&str> = self
            .selected
            .iter()
            .filter(|id| !self.items.iter().any(|item| &item.id == *id))
            .map(String::as_str)
            .collect();
        if !stale.is_empty() {
            log::warn!(
                "grid {}: selection references items no longer in the list: {stale:?}",
                self.id
            );
        }
    }

    /// True when the selection holds ids with no corresponding item.
    pub fn has_phantom_selection(&self) -> bool {
        self.selected
            .iter()
            .any(|id| !self.items.iter().any(|item| &item.id == id))
    }

    // Interaction

    /// Toggle an item's selection membership and fire `on_select` with the
    /// resulting sequence. Returns whether the selection changed.
    pub fn toggle(&mut self, item_id: &str) -> bool {
        let next: Vec<String> = if self.is_selected(item_id) {
            self.selected
                .iter()
                .filter(|id| *id != item_id)
                .cloned()
                .collect()
        } else if self.selected.len() < self.max_select {
            let mut next = self.selected.clone();
            next.push(item_id.to_string());
            next
        } else {
            self.selected.clone()
        };

        log::debug!(
            "grid {}: toggle {item_id}: {:?} -> {next:?}",
            self.id,
            self.selected
        );

        if let Some(on_select) = &mut self.on_select {
            on_select(&next);
        }

        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    /// Route a left click on one of this grid's cells to [`toggle`](Self::toggle).
    /// Returns whether the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Click {
            target: Some(target),
            button: MouseButton::Left,
            ..
        } = event
        else {
            return false;
        };

        let Some(item_id) = self.item_id_for(target).map(str::to_string) else {
            return false;
        };

        self.toggle(&item_id);
        true
    }

    // View

    /// Build the element tree for the current items and selection. An empty
    /// item list builds an empty zero-sized element that paints nothing.
    pub fn build(&self) -> Element {
        if self.items.is_empty() {
            return Element::box_()
                .id(self.id.clone())
                .width(Size::Fixed(0))
                .height(Size::Fixed(0));
        }

        let mut root = Element::col().id(self.id.clone()).width(Size::Fill);
        for (row_index, chunk) in self.items.chunks(self.max_per_row.max(1)).enumerate() {
            let mut row = Element::row()
                .id(format!("{}-row-{row_index}", self.id))
                .width(Size::Fill)
                .height(Size::Fixed(self.row_height));
            for item in chunk {
                row = row.child(self.build_cell(item));
            }
            root = root.child(row);
        }
        root
    }

    fn build_cell(&self, item: &GridItem<T>) -> Element {
        let selected = self.is_selected(&item.id);

        let (render, style_override) = if selected {
            (&self.selected_render, &self.selected_style)
        } else {
            (&self.unselected_render, &self.unselected_style)
        };

        let content = match render {
            Some(render) => render(item),
            None => default_label(item),
        };

        // A fixed fraction of the row rather than Flex, so cells in a short
        // last row keep the same width as full rows.
        Element::box_()
            .id(self.cell_id(&item.id))
            .width(Size::Percent(1.0 / self.max_per_row.max(1) as f32))
            .height(Size::Fill)
            .justify(Justify::Center)
            .align(Align::Center)
            .style(style_override.merged_over(&base_box_style()))
            .clickable(true)
            .child(content)
    }

    fn cell_id(&self, item_id: &str) -> String {
        format!("{}-item-{item_id}", self.id)
    }

    fn item_id_for(&self, element_id: &str) -> Option<&str> {
        let rest = element_id
            .strip_prefix(self.id.as_str())?
            .strip_prefix("-item-")?;
        self.items
            .iter()
            .find(|item| item.id == rest)
            .map(|item| item.id.as_str())
    }
}
