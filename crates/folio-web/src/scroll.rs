//! Smooth scrolling to page anchors via `requestAnimationFrame`

use folio_core::{Navigator, ScrollAnimation, ScrollGeneration};
use folio_types::ScrollRequest;
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;
use std::sync::Arc;

/// Scrolls the browser window; a newer request cancels a running animation
#[derive(Debug, Clone, Default)]
pub struct WindowNavigator {
    generation: ScrollGeneration,
}

impl WindowNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for WindowNavigator {
    fn scroll_to(&self, request: ScrollRequest) {
        let Some(window) = web_sys::window() else {
            leptos::logging::error!("Failed to get window object");
            return;
        };
        let Some(element) = window
            .document()
            .and_then(|d| d.get_element_by_id(request.target.id()))
        else {
            leptos::logging::warn!("Scroll target #{} not found", request.target.id());
            return;
        };

        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let element_top = element.get_bounding_client_rect().top();
        let animation = ScrollAnimation::for_request(&request, scroll_y, element_top);

        let token = self.generation.begin();
        step(self.generation.clone(), token, animation, now_ms(&window));
    }
}

fn now_ms(window: &web_sys::Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Move one frame, then schedule the next until the animation ends or a
/// newer one takes over
fn step(generation: ScrollGeneration, token: u64, animation: ScrollAnimation, started_at: f64) {
    if !generation.is_current(token) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let elapsed = now_ms(&window) - started_at;
    window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));

    if !animation.is_finished(elapsed) {
        request_animation_frame(move || step(generation, token, animation, started_at));
    }
}

/// Scroll collaborator used by the header (swappable through context)
#[derive(Clone)]
pub struct NavigatorContext(pub Arc<dyn Navigator>);

impl NavigatorContext {
    pub fn window() -> Self {
        Self(Arc::new(WindowNavigator::new()))
    }

    pub fn scroll_to(&self, request: ScrollRequest) {
        self.0.scroll_to(request);
    }
}

/// Navigator from context, the window scroller when none was provided
pub fn use_navigator() -> NavigatorContext {
    use_context::<NavigatorContext>().unwrap_or_else(NavigatorContext::window)
}
