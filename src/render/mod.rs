use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb};

/// Paint the element tree into `buf` using the rects in `layout`.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(root, layout, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    if let Some(bg) = &element.style.background {
        buf.fill_bg(rect, bg.to_rgb());
    }

    render_border(element, rect, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = element.style.background.as_ref().map(|c| c.to_rgb());

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
    if inner.is_empty() {
        return;
    }

    for (i, line) in text.lines().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, inner.width as usize);
        let mut x =
            inner.x + align_offset(display_width(&line), inner.width as usize, element.text_align) as u16;

        for ch in line.chars() {
            if x >= inner.right() {
                break;
            }
            // Keep whatever background was painted underneath unless the
            // text element has one of its own.
            let bg = explicit_bg
                .or_else(|| buf.get(x, y).map(|c| c.bg))
                .unwrap_or(Rgb::new(0, 0, 0));
            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(element.style.text_style),
            );
            x += char_width(ch).max(1) as u16;
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
