//! Runs in a real browser: `wasm-pack test --headless --firefox frontend`.
#![cfg(target_arch = "wasm32")]

use avalon_web::utils::scroll::{self, ScrollSubscription};
use avalon_web::App;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

// Scroll events are delivered on the next frame.
const SETTLE_MS: u32 = 100;

fn window() -> Window {
    web_sys::window().expect("window")
}

fn document() -> Document {
    window().document().expect("document")
}

/// Makes sure the page is tall enough to scroll, then returns to the top.
fn tall_page() {
    let document = document();
    if document.get_element_by_id("scroll-filler").is_none() {
        let filler = document.create_element("div").expect("filler");
        filler.set_id("scroll-filler");
        filler
            .set_attribute("style", "height: 5000px")
            .expect("filler style");
        document
            .body()
            .expect("body")
            .append_child(&filler)
            .expect("append filler");
    }
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

async fn scroll_and_settle(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
    TimeoutFuture::new(SETTLE_MS).await;
}

fn scroll_y() -> f64 {
    window().scroll_y().expect("scroll_y")
}

fn mount_root() -> Element {
    let document = document();
    let root = document.create_element("div").expect("root");
    document
        .body()
        .expect("body")
        .prepend_with_node_1(&root)
        .expect("prepend root");
    root
}

#[wasm_bindgen_test]
async fn subscription_reports_offsets_past_the_threshold() {
    tall_page();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let seen = seen.clone();
        ScrollSubscription::attach(move |offset| seen.borrow_mut().push(scroll::is_scrolled(offset)))
    };
    // Initial sample at the top.
    assert_eq!(*seen.borrow(), vec![false]);

    scroll_and_settle(120.0).await;
    assert_eq!(seen.borrow().last(), Some(&true));

    scroll_and_settle(0.0).await;
    assert_eq!(seen.borrow().last(), Some(&false));
}

#[wasm_bindgen_test]
async fn dropped_subscription_stops_listening() {
    tall_page();
    let calls = Rc::new(RefCell::new(0usize));
    let subscription = {
        let calls = calls.clone();
        ScrollSubscription::attach(move |_| *calls.borrow_mut() += 1)
    };
    scroll_and_settle(80.0).await;
    let before = *calls.borrow();
    assert!(before >= 2);

    drop(subscription);
    scroll_and_settle(400.0).await;
    scroll_and_settle(10.0).await;
    assert_eq!(*calls.borrow(), before);
}

#[wasm_bindgen_test]
async fn navigating_returns_to_top_but_mounting_does_not() {
    tall_page();
    scroll_and_settle(120.0).await;

    let root = mount_root();
    let app = yew::Renderer::<App>::with_root(root.clone()).render();
    TimeoutFuture::new(SETTLE_MS).await;

    // Mount keeps the reader where they are and picks up the offset immediately.
    assert_eq!(scroll_y(), 120.0);
    assert!(root.query_selector(".navbar-solid").expect("selector").is_some());
    assert!(root.query_selector(".page-home").expect("selector").is_some());

    let consulting: HtmlElement = root
        .query_selector(".nav-desktop .nav-link:nth-child(2)")
        .expect("selector")
        .expect("consulting link")
        .dyn_into()
        .expect("html element");
    consulting.click();
    TimeoutFuture::new(SETTLE_MS).await;

    assert_eq!(scroll_y(), 0.0);
    assert!(root.query_selector(".page-consulting").expect("selector").is_some());
    assert!(root.query_selector(".page-home").expect("selector").is_none());

    app.destroy();
    root.remove();
}
