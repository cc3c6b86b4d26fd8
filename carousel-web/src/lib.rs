/// Carousel Web - DOM binding for the infinity carousel
///
/// Finds the `li` slides under a container element, applies the layout the
/// rotation engine computes as inline style and CSS classes, and turns clicks
/// on a slide (or anything nested inside one) into rotations.
use carousel_core::{Carousel, CarouselConfig, CarouselError, SlideAttributes};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

pub const SLIDER_CLASS: &str = "infinity-slider";
pub const SLIDE_CLASS: &str = "infinity-slide";
pub const ACTIVE_CLASS: &str = "infinity-active";
pub const LEFT_CLASS: &str = "infinity-left";
pub const RIGHT_CLASS: &str = "infinity-right";
pub const POSITION_ATTRIBUTE: &str = "data-pos";

struct SliderState {
    container: HtmlElement,
    carousel: Carousel<HtmlElement>,
}

#[wasm_bindgen]
pub struct InfinitySlider {
    state: Rc<RefCell<SliderState>>,
    // dropping a closure detaches its listener, so they live as long as the slider
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl InfinitySlider {
    /// Resolve the container `#slider_id` and the `li` slides inside it.
    ///
    /// A missing or zero `multiplier` uses the default slide width.
    #[wasm_bindgen(constructor)]
    pub fn new(slider_id: &str, multiplier: Option<u32>) -> Result<InfinitySlider, JsValue> {
        let config = CarouselConfig::new(slider_id, multiplier.unwrap_or(0));

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {}", config.container_id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("slider container is not an HTML element"))?;

        let nodes = document.query_selector_all(&format!("#{} li", config.container_id))?;
        let slides: Vec<HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();

        let carousel = Carousel::from_config(slides, &config).map_err(to_js_error)?;
        log::debug!(
            "slider #{} bound to {} slides",
            config.container_id,
            carousel.len()
        );

        Ok(InfinitySlider {
            state: Rc::new(RefCell::new(SliderState {
                container,
                carousel,
            })),
            listeners: Vec::new(),
        })
    }

    /// Mark the container and slides, then apply the starting layout.
    #[wasm_bindgen(js_name = initializeSlider)]
    pub fn initialize(&self) -> Result<(), JsValue> {
        let state = self.state.borrow();
        state.container.class_list().add_1(SLIDER_CLASS)?;
        for slide in state.carousel.slides() {
            slide.item.class_list().add_1(SLIDE_CLASS)?;
        }
        apply_layout(&state.carousel)
    }

    /// Register a click listener on every slide.
    #[wasm_bindgen(js_name = addClickListener)]
    pub fn add_click_listener(&mut self) -> Result<(), JsValue> {
        let elements: Vec<HtmlElement> = self
            .state
            .borrow()
            .carousel
            .slides()
            .iter()
            .map(|slide| slide.item.clone())
            .collect();

        for element in elements {
            let state = Rc::clone(&self.state);
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Err(e) = handle_click(&state, &event) {
                    log::warn!("slide click ignored: {:?}", e);
                }
            }) as Box<dyn FnMut(Event)>);
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            self.listeners.push(closure);
        }
        Ok(())
    }

    /// Rotate as if the slide at `position` was clicked. Returns whether
    /// anything moved.
    pub fn rotate(&self, position: usize) -> Result<bool, JsValue> {
        rotate_state(&self.state, position)
    }

    #[wasm_bindgen(getter, js_name = centerPosition)]
    pub fn center_position(&self) -> usize {
        self.state.borrow().carousel.center_position()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.state.borrow().carousel.len()
    }

    /// Current attribute records of every slide, as JSON.
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.borrow().carousel.layout())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Build, initialize and wire up a slider in one call.
#[wasm_bindgen]
pub fn mount(slider_id: &str, multiplier: Option<u32>) -> Result<InfinitySlider, JsValue> {
    let mut slider = InfinitySlider::new(slider_id, multiplier)?;
    slider.initialize()?;
    slider.add_click_listener()?;
    Ok(slider)
}

fn handle_click(state: &Rc<RefCell<SliderState>>, event: &Event) -> Result<(), JsValue> {
    let target = event
        .target()
        .ok_or_else(|| JsValue::from_str("click without a target"))?
        .dyn_into::<Element>()
        .map_err(|_| JsValue::from_str("click target is not an element"))?;

    // nested content inside a slide carries no position; climb to its li
    let slide = if target.has_attribute(POSITION_ATTRIBUTE) {
        target
    } else {
        target
            .closest("li")?
            .ok_or_else(|| JsValue::from_str("click outside any slide"))?
    };

    let position = parse_position(slide.get_attribute(POSITION_ATTRIBUTE).as_deref())
        .ok_or_else(|| JsValue::from_str("slide has no readable position"))?;
    rotate_state(state, position)?;
    Ok(())
}

fn rotate_state(state: &Rc<RefCell<SliderState>>, position: usize) -> Result<bool, JsValue> {
    let mut state = state
        .try_borrow_mut()
        .map_err(|_| JsValue::from_str("slider is busy"))?;
    let moved = state.carousel.rotate(position).map_err(to_js_error)?;
    if moved.is_some() {
        apply_layout(&state.carousel)?;
    }
    Ok(moved.is_some())
}

fn apply_layout(carousel: &Carousel<HtmlElement>) -> Result<(), JsValue> {
    for slide in carousel.slides() {
        apply_attributes(&slide.item, &carousel.attributes_of(slide))?;
    }
    Ok(())
}

fn apply_attributes(element: &HtmlElement, attrs: &SlideAttributes) -> Result<(), JsValue> {
    element.set_attribute(POSITION_ATTRIBUTE, &attrs.position.to_string())?;

    let style = element.style();
    style.set_property("left", &left_style(attrs))?;
    style.set_property("z-index", &attrs.z_index.to_string())?;

    let classes = element.class_list();
    classes.toggle_with_force(ACTIVE_CLASS, attrs.is_center)?;
    classes.toggle_with_force(LEFT_CLASS, attrs.is_left_of_center)?;
    classes.toggle_with_force(RIGHT_CLASS, attrs.is_right_of_center)?;
    Ok(())
}

fn left_style(attrs: &SlideAttributes) -> String {
    format!("{}px", attrs.pixel_offset)
}

fn parse_position(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok()
}

fn to_js_error(e: CarouselError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Setup panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_style_uses_pixels() {
        let attrs = SlideAttributes::compute(0, 2, 3, 7, 100);
        assert_eq!(left_style(&attrs), "300px");
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(Some("4")), Some(4));
        assert_eq!(parse_position(Some(" 0 ")), Some(0));
        assert_eq!(parse_position(Some("-1")), None);
        assert_eq!(parse_position(None), None);
    }
}
