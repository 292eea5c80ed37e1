use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Later siblings win, matching render order (last painted is on top).
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    if let Content::Children(children) = &root.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test(layout, child, x, y) {
                return Some(id);
            }
        }
    }

    root.clickable.then(|| root.id.clone())
}
