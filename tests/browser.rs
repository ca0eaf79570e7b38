#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, window};

use skywater_engine::mount;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().and_then(|w| w.document()).expect("document")
}

fn append(
    document: &Document,
    parent: &Element,
    tag: &str,
    id: Option<&str>,
    class: Option<&str>,
) -> Element {
    let el = document.create_element(tag).expect("create element");
    if let Some(id) = id {
        el.set_id(id);
    }
    if let Some(class) = class {
        el.set_class_name(class);
    }
    parent.append_child(&el).expect("append");
    el
}

// One test: mounting touches page-global state (canvases, storage, body class).
#[wasm_bindgen_test]
fn mount_toggle_and_hover() {
    let document = document();
    let storage = window().and_then(|w| w.local_storage().ok().flatten()).expect("storage");
    storage.remove_item("theme").expect("clear theme");

    let err = mount(Some(1.0)).err().expect("mount without canvases fails");
    assert!(err.as_string().unwrap_or_default().contains("missing element"));

    let body: Element = document.body().expect("body").unchecked_into();
    append(&document, &body, "canvas", Some("rainCanvas"), None);
    append(&document, &body, "canvas", Some("skyCanvas"), None);
    append(&document, &body, "button", None, Some("theme-toggle"));
    let wrap = append(&document, &body, "div", None, Some("icon-wrap"));

    let backdrop = mount(Some(7.0)).expect("mount");
    assert_eq!(backdrop.theme(), "dark");
    assert!(body.class_list().contains("dark"));

    wrap.dispatch_event(&Event::new("mouseenter").expect("event")).expect("dispatch");
    assert_eq!(wrap.query_selector_all(".rain-drop").expect("query").length(), 12);
    assert_eq!(wrap.query_selector_all(".ripple").expect("query").length(), 0);

    assert_eq!(backdrop.toggle_theme(), "light");
    assert_eq!(storage.get_item("theme").expect("read").as_deref(), Some("light"));
    assert!(body.class_list().contains("light"));
    assert!(!body.class_list().contains("dark"));

    wrap.dispatch_event(&Event::new("mouseenter").expect("event")).expect("dispatch");
    assert_eq!(wrap.query_selector_all(".ripple").expect("query").length(), 3);

    assert_eq!(backdrop.toggle_theme(), "dark");
    assert_eq!(storage.get_item("theme").expect("read").as_deref(), Some("dark"));
    backdrop.stop();

    // Stopping removes live particles and detaches the hover listeners.
    let particles = |w: &Element| {
        w.query_selector_all(".rain-drop, .ripple").expect("query").length()
    };
    assert_eq!(particles(&wrap), 0);
    for _ in 0..5 {
        wrap.dispatch_event(&Event::new("mouseenter").expect("event")).expect("dispatch");
    }
    assert_eq!(particles(&wrap), 0);
}
