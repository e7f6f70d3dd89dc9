// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento obligatorio: su ausencia es un error de la página
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Vaciar un contenedor
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

// Visibilidad por la clase "hidden" de las páginas

pub fn show(element: &Element) -> Result<(), JsValue> {
    remove_class(element, "hidden")
}

pub fn hide(element: &Element) -> Result<(), JsValue> {
    add_class(element, "hidden")
}

/// Visibilidad por `style.display` (campos que no usan la clase "hidden")
pub fn set_displayed(element: &Element, displayed: bool) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?;
    html.style()
        .set_property("display", if displayed { "block" } else { "none" })
}

/// Habilitar/deshabilitar un botón mientras hay una petición en vuelo
pub fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

/// Valor de un control (input, select o textarea)
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

pub fn set_control_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Valor de un control por ID; vacío si no existe
pub fn value_by_id(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| control_value(&el))
        .unwrap_or_default()
}

/// Control de un formulario por su atributo `name`
pub fn form_control(form: &Element, name: &str) -> Option<Element> {
    form.query_selector(&format!("[name=\"{}\"]", name)).ok().flatten()
}

pub fn form_value(form: &Element, name: &str) -> Option<String> {
    form_control(form, name).and_then(|el| control_value(&el))
}

pub fn set_form_value(form: &Element, name: &str, value: &str) {
    if let Some(control) = form_control(form, name) {
        set_control_value(&control, value);
    }
}

pub fn reset_form(form: &Element) {
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
}

/// Todos los elementos que cumplen un selector CSS
pub fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
