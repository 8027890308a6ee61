//! Launch Field entry point
//!
//! Wires the particle background, countdown, subscription form, and skill
//! suggestion widgets to the hosting page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
        HtmlInputElement, MouseEvent,
    };

    use launch_field::api::{
        Backoff, endpoint_url, parse_skill_list, skill_detail_request, skill_list_request,
        transport::generate,
    };
    use launch_field::consts::COUNTDOWN_INTERVAL_MS;
    use launch_field::countdown::{Countdown, CountdownStatus, TimeParts};
    use launch_field::field::{Field, Pointer};
    use launch_field::form::Submission;
    use launch_field::renderer::{canvas::CanvasSurface, render_frame};

    /// Injected by the hosting environment
    const API_KEY: &str = "";

    /// Animation state shared between the frame loop and input handlers
    struct App {
        field: Field,
        pointer: Pointer,
        surface: CanvasSurface,
    }

    /// Cancellation handle for the frame loop
    ///
    /// The page never stops the loop itself; the handle exists so embedders
    /// and tests can.
    #[derive(Clone)]
    pub struct FrameLoop {
        running: Rc<Cell<bool>>,
    }

    impl FrameLoop {
        fn new() -> Self {
            Self {
                running: Rc::new(Cell::new(true)),
            }
        }

        #[allow(dead_code)]
        pub fn stop(&self) {
            self.running.set(false);
        }

        fn is_running(&self) -> bool {
            self.running.get()
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Launch Field starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("particle-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            field: Field::new(width, height, seed),
            pointer: Pointer::new(width, height),
            surface: CanvasSurface::new(ctx),
        }));

        log::info!(
            "Particle field initialized: {}x{}, {} particles, seed {}",
            width,
            height,
            app.borrow().field.particles().len(),
            seed
        );

        setup_pointer_handlers(app.clone());
        setup_resize_handler(canvas, app.clone());
        setup_countdown(&document);
        setup_form(&document);
        setup_suggestions(&document);

        let frame_loop = FrameLoop::new();
        schedule_frame(app, frame_loop);

        log::info!("Launch Field running!");
    }

    /// Window inner dimensions; zero when unavailable
    fn viewport_size() -> (f32, f32) {
        let window = web_sys::window().expect("no window");
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (width as f32, height as f32)
    }

    fn setup_pointer_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Pointer move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .pointer
                    .set(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer leaves the viewport
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().pointer.clear();
            });
            let _ = window
                .add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = viewport_size();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            let mut app = app.borrow_mut();
            app.pointer.resize(width, height);
            app.field.resize(width, height);
            log::info!(
                "Resized field to {}x{}, {} particles",
                width,
                height,
                app.field.particles().len()
            );
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn schedule_frame(app: Rc<RefCell<App>>, frame_loop: FrameLoop) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            animate(app, frame_loop);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animate(app: Rc<RefCell<App>>, frame_loop: FrameLoop) {
        if !frame_loop.is_running() {
            return;
        }
        {
            let mut app = app.borrow_mut();
            let pointer = app.pointer;
            app.field.advance(&pointer);
            let App { field, surface, .. } = &mut *app;
            render_frame(surface, field);
        }
        schedule_frame(app, frame_loop);
    }

    fn setup_countdown(document: &Document) {
        if document.get_element_by_id("countdown").is_none() {
            log::warn!("Countdown element not found, skipping");
            return;
        }

        let countdown = Countdown::starting_at(js_sys::Date::now() as i64);
        let interval_id = Rc::new(Cell::new(0));

        let id_slot = interval_id.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            match countdown.remaining(js_sys::Date::now() as i64) {
                CountdownStatus::Counting(parts) => {
                    set_text(&document, "days", &TimeParts::padded(parts.days));
                    set_text(&document, "hours", &TimeParts::padded(parts.hours));
                    set_text(&document, "minutes", &TimeParts::padded(parts.minutes));
                    set_text(&document, "seconds", &TimeParts::padded(parts.seconds));
                }
                CountdownStatus::Live => {
                    if let Some(el) = document.get_element_by_id("countdown") {
                        el.set_inner_html("<div class=\"text-2xl font-bold\">We are live!</div>");
                    }
                    window.clear_interval_with_handle(id_slot.get());
                }
            }
        });

        let window = web_sys::window().expect("no window");
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTDOWN_INTERVAL_MS,
        ) {
            Ok(id) => interval_id.set(id),
            Err(err) => log::error!("Failed to start countdown interval: {err:?}"),
        }
        closure.forget();
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn setup_form(document: &Document) {
        let Some(form) = document.get_element_by_id("subscribeForm") else {
            log::warn!("Subscribe form not found, skipping");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let document = web_sys::window().unwrap().document().unwrap();
            let Some(input) = document
                .get_element_by_id("emailInput")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            let submission = Submission::evaluate(&input.value());
            if submission == Submission::Accepted {
                input.set_value("");
            }
            show_form_message(&document, submission);
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn show_form_message(document: &Document, submission: Submission) {
        let Some(message) = document.get_element_by_id("formMessage") else {
            return;
        };
        message.set_text_content(Some(submission.message()));
        if submission.is_error() {
            let _ = message.class_list().add_1("text-red-400");
        }

        let clear = Closure::<dyn FnMut()>::new(move || {
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("formMessage") {
                el.set_text_content(Some(""));
                let _ = el.class_list().remove_1("text-red-400");
            }
        });
        let window = web_sys::window().expect("no window");
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.as_ref().unchecked_ref(),
            submission.clear_after_ms(),
        );
        clear.forget();
    }

    fn setup_suggestions(document: &Document) {
        let Some(button) = document.get_element_by_id("suggestBtn") else {
            log::warn!("Suggest button not found, skipping");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let document = web_sys::window().unwrap().document().unwrap();
            let Some(container) = document.get_element_by_id("suggestions") else {
                return;
            };

            let interest = document
                .get_element_by_id("interestInput")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            let interest = interest.trim().to_string();

            if interest.is_empty() {
                container.set_inner_html("<p class=\"text-red-400\">Please enter an interest.</p>");
                return;
            }

            show_loading(&container, "Thinking...");
            set_opacity(&document, "skill-details", "0");
            spawn_local(fetch_skill_list(interest));
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    async fn fetch_skill_list(interest: String) {
        let request = skill_list_request(&interest);
        let result = generate(&endpoint_url(API_KEY), &request, &Backoff::default()).await;

        let document = web_sys::window().unwrap().document().unwrap();
        let Some(container) = document.get_element_by_id("suggestions") else {
            return;
        };

        match result {
            Ok(response) => match response.first_text().map(parse_skill_list) {
                Some(Ok(skills)) => display_skills(&document, &container, &skills),
                _ => container.set_inner_html(
                    "<p class=\"text-red-400\">Sorry, couldn't generate suggestions. \
                     Try another interest.</p>",
                ),
            },
            Err(err) => {
                log::warn!("Skill suggestion request failed: {err}");
                container.set_inner_html(
                    "<p class=\"text-red-400\">Sorry, something went wrong. \
                     Please try again later.</p>",
                );
            }
        }
    }

    fn display_skills(document: &Document, container: &Element, skills: &[String]) {
        container.set_inner_html("");
        for skill in skills {
            let button = match document.create_element("button") {
                Ok(button) => button,
                Err(err) => {
                    log::error!("Failed to create skill button: {err:?}");
                    continue;
                }
            };
            button.set_text_content(Some(skill));
            let _ = button.set_attribute(
                "class",
                "bg-gray-700 hover:bg-orange-600 text-white font-medium py-2 px-4 \
                 rounded-full transition-colors",
            );

            let skill = skill.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                spawn_local(fetch_skill_detail(skill.clone()));
            });
            let _ =
                button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            let _ = container.append_child(&button);
        }
    }

    async fn fetch_skill_detail(skill: String) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(details) = document.get_element_by_id("skill-details") else {
            return;
        };
        set_opacity(&document, "skill-details", "1");
        show_loading(&details, &format!("Explaining \"{skill}\"..."));

        let request = skill_detail_request(&skill);
        match generate(&endpoint_url(API_KEY), &request, &Backoff::default()).await {
            Ok(response) => match response.first_text() {
                Some(text) => details.set_inner_html(&format!(
                    "<p class=\"text-lg text-amber-300\">{text}</p>"
                )),
                None => show_detail_error(&details),
            },
            Err(err) => {
                log::warn!("Skill detail request failed: {err}");
                show_detail_error(&details);
            }
        }
    }

    fn show_detail_error(details: &Element) {
        details.set_inner_html(
            "<p class=\"text-red-400\">Could not fetch details for this skill.</p>",
        );
    }

    fn show_loading(container: &Element, text: &str) {
        container.set_inner_html(&format!(
            "<div class=\"flex flex-col items-center justify-center gap-2\">\
             <div class=\"loader\"></div>\
             <p class=\"text-sm text-gray-400\">{text}</p></div>"
        ));
    }

    fn set_opacity(document: &Document, id: &str, value: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("opacity", value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Launch Field (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to run the page");

    println!("\nRunning field smoke test...");
    smoke_test_field();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_field() {
    use launch_field::field::{Field, Pointer};

    let mut field = Field::new(900.0, 900.0, 42);
    let pointer = Pointer::new(900.0, 900.0);
    assert_eq!(field.particles().len(), 90);

    for _ in 0..600 {
        field.advance(&pointer);
    }
    for p in field.particles() {
        assert!(p.pos.x >= -1.0 && p.pos.x <= 901.0);
        assert!(p.pos.y >= -1.0 && p.pos.y <= 901.0);
    }
    let links = field.links();
    println!(
        "✓ 90 particles in bounds after 600 ticks, {} links",
        links.len()
    );
}
