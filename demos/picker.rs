use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuigrid::{
    translate, Color, Edges, Element, Event, GridItem, InteractiveGrid, Key, Size, Style, Terminal,
    TextAlign,
};

fn main() -> std::io::Result<()> {
    // Terminal owns stdout, so logs go to a file.
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("picker.log")?,
    );

    let items = vec![
        GridItem::new("apple", "Apple"),
        GridItem::new("banana", "Banana"),
        GridItem::new("cherry", "Cherry"),
        GridItem::new("durian", "Durian"),
        GridItem::new("elder", "Elderberry"),
    ];

    let mut grid = InteractiveGrid::new(items)
        .id("picker")
        .max_per_row(3)
        .max_select(2)
        .row_height(5)
        .unselected_render(|item| {
            Element::text(item.data).style(Style::new().foreground(Color::rgb(255, 255, 255)))
        })
        .selected_render(|item| {
            Element::text(format!("✔ {}", item.data))
                .style(Style::new().foreground(Color::rgb(255, 255, 255)).bold())
        })
        .on_select(|selection| log::info!("selection: {selection:?}"));

    let mut term = Terminal::new()?;

    loop {
        let root = ui(&grid);
        term.render(&root)?;

        for raw in term.poll(Some(Duration::from_millis(100)))? {
            match translate(&raw, &root, term.layout()) {
                Some(Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                }) => return Ok(()),
                Some(event) => {
                    grid.handle_event(&event);
                }
                None => {}
            }
        }
    }
}

fn ui(grid: &InteractiveGrid<&str>) -> Element {
    Element::col()
        .padding(Edges::all(1))
        .gap(1)
        .child(header())
        .child(grid.build())
        .child(footer())
}

fn header() -> Element {
    Element::box_()
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .style(Style::new().background(Color::oklch(0.3, 0.1, 250.0)))
        .child(
            Element::text("pick up to two fruits")
                .width(Size::Fill)
                .text_align(TextAlign::Center),
        )
}

fn footer() -> Element {
    Element::box_()
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .style(Style::new().background(Color::oklch(0.25, 0.02, 250.0)))
        .child(Element::text("click to toggle · 'q' to quit"))
}
