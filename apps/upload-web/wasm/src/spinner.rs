//! Accessible progress indicator shown while the native upload proceeds

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Build the spinner markup: a visually-hidden label for screen readers
/// next to the animated loader circle. Styling comes from the page's
/// `ccms-loader` stylesheet rules.
pub fn build(document: &Document, label: &str) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;

    let hidden_label = document.create_element("p")?;
    hidden_label.set_class_name("govuk-visually-hidden");
    hidden_label.set_text_content(Some(label));
    root.append_child(&hidden_label)?;

    let loader_wrap = document.create_element("div")?;
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("class", "ccms-loader")?;
    svg.set_attribute("height", "100")?;
    svg.set_attribute("width", "100")?;

    let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
    circle.set_attribute("cx", "50")?;
    circle.set_attribute("cy", "50")?;
    circle.set_attribute("r", "40")?;
    circle.set_attribute("fill", "none")?;

    svg.append_child(&circle)?;
    loader_wrap.append_child(&svg)?;
    root.append_child(&loader_wrap)?;

    Ok(root)
}
