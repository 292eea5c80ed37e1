use tuigrid::render::render_to_buffer;
use tuigrid::{
    Buffer, Cell, Color, Element, GridItem, InteractiveGrid, Rect, Rgb, Size, Style, TextAlign,
};

const GRAY: Rgb = Rgb::new(0xad, 0xad, 0xad);
const ORANGE: Rgb = Rgb::new(0xff, 0x66, 0x00);

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = tuigrid::layout::layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf);
    buf
}

fn items(ids: &[&str]) -> Vec<GridItem<()>> {
    ids.iter().map(|id| GridItem::new(*id, ())).collect()
}

// ============================================================================
// Grid Painting
// ============================================================================

#[test]
fn test_unselected_cells_paint_gray() {
    let grid = InteractiveGrid::new(items(&["a", "b"])).id("g").row_height(5);
    let buf = render(&grid.build(), 20, 10);

    // Inside cell a and cell b.
    assert_eq!(buf.get(2, 1).unwrap().bg, GRAY);
    assert_eq!(buf.get(12, 1).unwrap().bg, GRAY);
}

#[test]
fn test_selected_cell_paints_orange() {
    let mut grid = InteractiveGrid::new(items(&["a", "b"])).id("g").row_height(5);
    grid.toggle("b");
    let buf = render(&grid.build(), 20, 10);

    assert_eq!(buf.get(2, 1).unwrap().bg, GRAY, "a stays unselected");
    assert_eq!(buf.get(12, 1).unwrap().bg, ORANGE, "b is selected");
}

#[test]
fn test_default_label_is_centered_on_cell_background() {
    let grid = InteractiveGrid::new(items(&["a", "b"])).id("g").row_height(5);
    let buf = render(&grid.build(), 20, 10);

    // Cell a spans (0,0)-(10,5); its one-char label lands in the middle.
    let label = buf.get(4, 2).unwrap();
    assert_eq!(label.char, 'a');
    assert_eq!(label.fg, Rgb::new(255, 255, 255));
    assert_eq!(label.bg, GRAY, "label keeps the box fill underneath");
}

#[test]
fn test_second_row_below_first() {
    let grid = InteractiveGrid::new(items(&["a", "b", "c"]))
        .id("g")
        .max_per_row(2)
        .row_height(5);
    let buf = render(&grid.build(), 20, 10);

    // Row 1 holds only c, in the left half.
    assert_eq!(buf.get(2, 6).unwrap().bg, GRAY);
    assert_eq!(
        buf.get(12, 6).unwrap().bg,
        Rgb::new(0, 0, 0),
        "no padding cell on the short row"
    );
}

#[test]
fn test_empty_grid_paints_nothing() {
    let grid = InteractiveGrid::new(items(&[]));
    let buf = render(&grid.build(), 20, 10);

    for y in 0..10 {
        for x in 0..20 {
            assert_eq!(buf.get(x, y), Some(&Cell::default()));
        }
    }
}

// ============================================================================
// Text Painting
// ============================================================================

#[test]
fn test_text_alignment() {
    let root = Element::box_()
        .id("root")
        .height(Size::Fixed(1))
        .child(
            Element::text("hi")
                .id("label")
                .width(Size::Fill)
                .text_align(TextAlign::Right),
        );

    let buf = render(&root, 10, 1);
    assert_eq!(buf.row_text(0), "        hi");
}

#[test]
fn test_text_truncates_with_ellipsis() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1))
        .child(Element::text("overflowing").id("label").width(Size::Fill));

    let buf = render(&root, 5, 1);
    assert_eq!(buf.row_text(0), "over…");
}

#[test]
fn test_text_foreground_color() {
    let root = Element::text("x")
        .id("label")
        .style(Style::new().foreground(Color::rgb(10, 20, 30)));

    let buf = render(&root, 5, 1);
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(10, 20, 30));
}

// ============================================================================
// Buffer Diff
// ============================================================================

#[test]
fn test_diff_reports_only_changed_cells() {
    let grid = InteractiveGrid::new(items(&["a"])).id("g").max_per_row(1);
    let before = render(&grid.build(), 10, 5);

    let mut after_grid = InteractiveGrid::new(items(&["a"])).id("g").max_per_row(1);
    after_grid.toggle("a");
    let after = render(&after_grid.build(), 10, 5);

    // Every difference is the background flipping gray -> orange.
    let changes: Vec<_> = after.diff(&before).collect();
    assert!(!changes.is_empty());
    for (_, _, cell) in changes {
        assert_eq!(cell.bg, ORANGE);
    }
}
