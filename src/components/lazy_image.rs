//! Lazy Image Component
//!
//! Cover images and thumbnails only get a source URL once they scroll
//! into view. Each image registers with a viewport intersection watcher
//! and is unobserved after the first load (one-shot).

use leptos::html::Img;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn LazyImage(
    src: String,
    #[prop(optional)] class: &'static str,
    #[prop(into, optional)] alt: String,
) -> impl IntoView {
    let node_ref = NodeRef::<Img>::new();

    Effect::new(move |_| {
        if let Some(img) = node_ref.get() {
            observe_once(&img);
        }
    });

    view! { <img node_ref=node_ref class=class alt=alt data-src=src /> }
}

fn observe_once(img: &web_sys::HtmlImageElement) {
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(img) = target.dyn_ref::<web_sys::HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                        let _ = img.remove_attribute("data-src");
                    }
                }
                observer.unobserve(&target);
            }
        },
    );

    match web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(img);
            cb.forget();
        }
        Err(_) => {
            // no observer support: load eagerly
            if let Some(src) = img.get_attribute("data-src") {
                img.set_src(&src);
            }
        }
    }
}
