use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Compute the rect of every element in the tree within `available`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = resolve_size(root.width, available.width, root, true);
    let height = resolve_size(root.height, available.height, root, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(root.id.clone(), rect);

    layout_children(root, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: fixed sizes and flex weights.
    let mut fixed_total = 0u16;
    let mut flex_total = 0u16;
    for child in children {
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row),
            Size::Percent(p) => fixed_total += (main_size as f32 * p) as u16,
            Size::Fill => flex_total += 1,
            Size::Flex(f) => flex_total += f.max(1),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let flex_unit = if flex_total > 0 {
        remaining / flex_total
    } else {
        0
    };

    // Second pass: resolve every child's main-axis size.
    let sizes: Vec<u16> = children
        .iter()
        .map(|child| match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Percent(p) => (main_size as f32 * p) as u16,
            Size::Fill => flex_unit,
            Size::Flex(f) => flex_unit * f.max(1),
        })
        .collect();

    let used: u16 = sizes.iter().sum::<u16>() + gap_total;
    let extra = main_size.saturating_sub(used);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::Center => (extra / 2, element.gap),
        Justify::End => (extra, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
        Justify::SpaceAround => {
            let spacing = extra / children.len() as u16;
            (spacing / 2, spacing + element.gap)
        }
    };

    // Third pass: place children, resolving cross-axis size and alignment.
    let mut offset = start_offset;
    for (child, &main) in children.iter().zip(&sizes) {
        let cross = match cross_axis_size(child, is_row) {
            Size::Fixed(n) => n.min(cross_size),
            Size::Fill | Size::Flex(_) => cross_size,
            Size::Percent(p) => ((cross_size as f32 * p) as u16).min(cross_size),
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row).min(cross_size)
                }
            }
        };

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(cross) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let clamped_main = main.min(main_size.saturating_sub(offset.min(main_size)));

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset,
                inner.y + cross_offset,
                clamped_main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset,
                cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += clamped_main + between_gap;
    }
}

fn main_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width).min(available),
        Size::Percent(p) => ((available as f32 * p) as u16).min(available),
    }
}

/// Content-based size estimate for `Size::Auto` elements.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                text.lines()
                    .map(|line| display_width(line) as u16)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along the main axis.
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along the cross axis.
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    content + padding + border
}
