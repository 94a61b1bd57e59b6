#![allow(missing_docs)]

use clicks::layout::{Layout, NAV_LINKS};
use clicks::pages::{Home, NotFound};
use sprig::{HeadlessRoot, View};
use std::cell::RefCell;
use std::rc::Rc;

fn nav_links(root: &HeadlessRoot) -> Vec<(String, String)> {
    root.with_tree(|tree| {
        tree.find_all("a")
            .into_iter()
            .map(|a| (a.text_content(), a.attribute("href").unwrap_or_default().to_owned()))
            .collect()
    })
}

fn expected_links() -> Vec<(String, String)> {
    vec![
        ("Home".to_owned(), "/".to_owned()),
        ("Twist".to_owned(), "/twist".to_owned()),
        ("Resources".to_owned(), "/resources".to_owned()),
    ]
}

#[test]
fn test_nav_constant_order() {
    assert_eq!(
        NAV_LINKS,
        [("Home", "/"), ("Twist", "/twist"), ("Resources", "/resources")]
    );
}

#[test]
fn test_links_rendered_on_every_page() {
    let pages: Vec<Box<dyn View>> = vec![Box::new(Home::new()), Box::new(NotFound)];

    for page in pages {
        let root = HeadlessRoot::mount(Layout::new(page));
        assert_eq!(nav_links(&root), expected_links());
    }
}

#[test]
fn test_links_survive_page_rerender() {
    let root = HeadlessRoot::mount(Layout::new(Box::new(Home::new())));

    root.click("button").unwrap();
    root.click("button").unwrap();

    assert!(root.markup().contains("<p>Clicks: 2</p>"));
    assert_eq!(nav_links(&root), expected_links());
}

#[test]
fn test_markup_contract() {
    let root = HeadlessRoot::mount(Layout::new(Box::new(Home::new())));

    assert_eq!(
        root.markup(),
        concat!(
            "<div>",
            "<div style=\"display: flex; gap: 12px\">",
            "<a href=\"/\">Home</a>",
            "<a href=\"/twist\">Twist</a>",
            "<a href=\"/resources\">Resources</a>",
            "</div>",
            "<div><h1>Hello</h1><p>Clicks: 0</p><button>Click me</button></div>",
            "</div>"
        )
    );
}

#[test]
fn test_navigating_away_and_back_resets_count() {
    let routes = clicks::routes().unwrap();
    let requested = Rc::new(RefCell::new(Vec::new()));
    let subscription = sprig_router::subscribe({
        let requested = requested.clone();
        move |path| requested.borrow_mut().push(path.to_owned())
    });

    let mount = |location: &str| {
        let page = routes.view_for(location).expect("fallback registered");
        HeadlessRoot::mount(Layout::new(page))
    };

    let root = mount("/");
    root.click("button").unwrap();
    root.click("button").unwrap();
    assert!(root.text().contains("Clicks: 2"));

    // First link in document order is "Home"; go through the nav to /twist.
    let twist = root.with_tree(|tree| tree.find_all("a")[1].listeners_for("click"));
    let event = sprig::Event::new("click");
    for listener in twist {
        listener(&event);
    }
    assert!(event.default_prevented());
    drop(root);

    let path = requested.borrow().last().cloned().unwrap();
    assert_eq!(path, "/twist");
    let root = mount(&path);
    assert!(root.text().contains("This page could not be found."));

    root.click("a").unwrap();
    drop(root);

    let path = requested.borrow().last().cloned().unwrap();
    assert_eq!(path, "/");
    let root = mount(&path);
    assert!(root.text().contains("Clicks: 0"));

    sprig_router::unsubscribe(subscription);
}
