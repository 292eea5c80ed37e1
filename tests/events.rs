use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton, MouseEvent,
    MouseEventKind,
};
use tuigrid::{
    hit_test, translate, Element, Event, GridItem, InteractiveGrid, Key, LayoutResult, MouseButton,
    Rect,
};

fn items(ids: &[&str]) -> Vec<GridItem<()>> {
    ids.iter().map(|id| GridItem::new(*id, ())).collect()
}

fn grid_layout(root: &Element, width: u16, height: u16) -> LayoutResult {
    tuigrid::layout::layout(root, Rect::from_size(width, height))
}

fn click(column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_finds_grid_cell() {
    let grid = InteractiveGrid::new(items(&["a", "b", "c", "d"]))
        .id("g")
        .max_per_row(2)
        .row_height(4);
    let root = grid.build();
    let layout = grid_layout(&root, 20, 8);

    assert_eq!(hit_test(&layout, &root, 5, 2), Some("g-item-a".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 2), Some("g-item-b".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 6), Some("g-item-c".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 6), Some("g-item-d".to_string()));
}

#[test]
fn test_hit_test_outside_returns_none() {
    let grid = InteractiveGrid::new(items(&["a"])).id("g").row_height(4);
    let root = grid.build();
    let layout = grid_layout(&root, 20, 8);

    assert_eq!(hit_test(&layout, &root, 50, 50), None);
}

#[test]
fn test_hit_test_skips_non_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("plain").id("label"));
    let layout = grid_layout(&root, 20, 5);

    assert_eq!(hit_test(&layout, &root, 1, 0), None);
}

// ============================================================================
// Event Translation
// ============================================================================

#[test]
fn test_translate_click_resolves_target() {
    let grid = InteractiveGrid::new(items(&["a", "b"])).id("g").row_height(4);
    let root = grid.build();
    let layout = grid_layout(&root, 20, 4);

    let event = translate(&click(3, 1), &root, &layout);

    assert_eq!(
        event,
        Some(Event::Click {
            target: Some("g-item-a".to_string()),
            x: 3,
            y: 1,
            button: MouseButton::Left,
        })
    );
}

#[test]
fn test_translate_ignores_release_and_move() {
    let grid = InteractiveGrid::new(items(&["a"])).id("g");
    let root = grid.build();
    let layout = grid_layout(&root, 20, 5);

    let release = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Up(CtMouseButton::Left),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    let moved = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(translate(&release, &root, &layout), None);
    assert_eq!(translate(&moved, &root, &layout), None);
}

#[test]
fn test_translate_key_and_resize() {
    let root = Element::box_().id("root");
    let layout = grid_layout(&root, 10, 10);

    let key = CtEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert_eq!(
        translate(&key, &root, &layout),
        Some(Event::Key {
            key: Key::Char('q'),
            modifiers: Default::default(),
        })
    );

    let resize = CtEvent::Resize(80, 24);
    assert_eq!(
        translate(&resize, &root, &layout),
        Some(Event::Resize {
            width: 80,
            height: 24,
        })
    );
}

// ============================================================================
// Click-to-Toggle End to End
// ============================================================================

#[test]
fn test_click_toggles_through_translation() {
    let mut grid = InteractiveGrid::new(items(&["a", "b", "c", "d", "e"]))
        .id("g")
        .max_per_row(2)
        .max_select(1)
        .row_height(4);

    // Click c (row 1, left half), then a (at capacity), then c again.
    for (x, y, expected) in [
        (5u16, 6u16, vec!["c"]),
        (5, 2, vec!["c"]),
        (5, 6, vec![]),
    ] {
        let root = grid.build();
        let layout = grid_layout(&root, 20, 12);
        let event = translate(&click(x, y), &root, &layout).unwrap();
        grid.handle_event(&event);
        assert_eq!(grid.selected(), expected.as_slice());
    }
}
