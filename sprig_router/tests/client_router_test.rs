#![allow(missing_docs)]
#![cfg(target_arch = "wasm32")]

use sprig::prelude::*;
use sprig_router::{ClientRouter, Params, Routes};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct Counter {
    clicks: Signal<u32>,
}

impl View for Counter {
    fn render(&self) -> Html {
        let clicks = self.clicks.clone();
        let onclick = action!(clicks => { clicks.update(|c| c + 1); });

        div()
            .child(p().text(format!("Clicks: {}", self.clicks.get())))
            .child(button().on("click", onclick).text("Click me"))
            .into()
    }
}

/// Navigation bar with one link, above the routed page.
struct Shell {
    page: Box<dyn View>,
}

impl View for Shell {
    fn render(&self) -> Html {
        let link = a()
            .attr("href", "/twist")
            .on_event("click", |event| {
                event.prevent_default();
                sprig_router::navigate("/twist");
            })
            .text("Twist");

        div().child(link).child(self.page.render()).into()
    }
}

fn routes() -> Routes {
    Routes::new()
        .page("/", |_: &Params| -> Box<dyn View> {
            Box::new(Counter {
                clicks: Signal::new(0),
            })
        })
        .unwrap()
        .fallback(|_: &Params| -> Box<dyn View> { Box::new(Html::from("missing")) })
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn pathname() -> String {
    window().location().pathname().unwrap()
}

fn container() -> web_sys::Element {
    let document = window().document().expect("no global `document` exists");
    let target = document.create_element("div").unwrap();
    target.set_id("client-router");
    document.body().unwrap().append_child(&target).unwrap();
    target
}

fn click(target: &web_sys::Element, selector: &str) {
    target
        .query_selector(selector)
        .unwrap()
        .expect("element rendered")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

// Navigation subscriptions last for the page, so the whole flow runs in one
// test with one router.
#[wasm_bindgen_test]
fn router_follows_links_and_history() {
    let window = window();
    let history = window.history().unwrap();
    let runner_url = window.location().href().unwrap();
    history
        .replace_state_with_url(&JsValue::NULL, "", Some("/"))
        .unwrap();

    let target = container();
    let _router = ClientRouter::new(routes(), target.clone(), |page| {
        Box::new(Shell { page }) as Box<dyn View>
    })
    .start()
    .unwrap();

    assert!(target.inner_html().contains("Clicks: 0"));
    click(&target, "button");
    click(&target, "button");
    assert!(target.inner_html().contains("Clicks: 2"));

    // The link's listener belongs to the mount it replaces.
    click(&target, "a");
    assert_eq!(pathname(), "/twist");
    assert_eq!(
        target.inner_html(),
        "<div><a href=\"/twist\">Twist</a>missing</div>"
    );

    // Going back builds a fresh page.
    history
        .push_state_with_url(&JsValue::NULL, "", Some("/"))
        .unwrap();
    window
        .dispatch_event(&web_sys::PopStateEvent::new("popstate").unwrap())
        .unwrap();
    assert!(target.inner_html().contains("Clicks: 0"));

    click(&target, "button");
    assert!(target.inner_html().contains("Clicks: 1"));

    click(&target, "a");
    assert_eq!(pathname(), "/twist");
    assert!(target.inner_html().contains("missing"));

    history
        .replace_state_with_url(&JsValue::NULL, "", Some(&runner_url))
        .unwrap();
}
