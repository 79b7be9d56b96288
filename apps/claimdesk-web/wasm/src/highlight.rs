//! Selection-to-highlight wiring against the live DOM.
//!
//! [`DomSectionNode`] adapts `web_sys::Element` to the engine's resolver;
//! [`SelectionBinding`] owns the listeners that feed it. A binding is
//! created when a document pair mounts and dropped when it unmounts or the
//! mapping table changes, so a listener can never resolve against a stale
//! table.

use claim_engine::resolver::{resolve_highlight, SectionNode};
use shared_types::{mappings_from_json, SectionMappings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

/// Attribute carrying the section identifier on rendered section elements.
const SECTION_ID_ATTR: &str = "data-section-id";

/// `SectionNode` over a live DOM element.
#[derive(Clone)]
pub struct DomSectionNode(Element);

impl DomSectionNode {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl SectionNode for DomSectionNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    fn section_id(&self) -> Option<String> {
        self.0.get_attribute(SECTION_ID_ATTR)
    }

    fn same_node(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(other.0.as_ref()))
    }
}

/// Resolve a text selection inside `root` to a policy-section id.
pub fn resolve_dom_selection(
    selected_text: &str,
    anchor: Option<&Element>,
    root: &Element,
    mappings: &SectionMappings,
) -> Option<String> {
    let anchor = anchor.cloned().map(DomSectionNode);
    resolve_highlight(
        selected_text,
        anchor.as_ref(),
        &DomSectionNode(root.clone()),
        mappings,
    )
}

/// Read the live window selection and resolve it against the pane.
fn selection_target(root: &Element, mappings: &SectionMappings) -> Option<String> {
    let selection = web_sys::window()?.get_selection().ok()??;
    let text = String::from(selection.to_string());
    let anchor = selection
        .anchor_node()
        .and_then(|node| node.parent_element());
    resolve_dom_selection(&text, anchor.as_ref(), root, mappings)
}

fn invoke_highlight(callback: &js_sys::Function, policy_id: Option<String>) {
    let value = match policy_id {
        Some(id) => JsValue::from_str(&id),
        None => JsValue::NULL,
    };
    let _ = callback.call1(&JsValue::NULL, &value);
}

/// Listener subscription for the report pane.
///
/// Owns the `mouseup` and `mouseleave` closures registered on the pane
/// root; `detach` (or dropping the binding) removes them. The mapping
/// table is moved into the closures at attach time — swapping documents
/// means dropping this binding and attaching a new one.
#[wasm_bindgen]
pub struct SelectionBinding {
    root: HtmlElement,
    on_mouseup: Closure<dyn FnMut(MouseEvent)>,
    on_mouseleave: Closure<dyn FnMut(MouseEvent)>,
    attached: bool,
}

impl SelectionBinding {
    /// Attach with an already-decoded mapping table.
    pub fn attach_with(
        root: HtmlElement,
        mappings: SectionMappings,
        on_highlight: js_sys::Function,
    ) -> Result<SelectionBinding, JsValue> {
        let pane: Element = root.clone().into();
        let callback = on_highlight.clone();
        let on_mouseup = Closure::wrap(Box::new(move |_event: MouseEvent| {
            invoke_highlight(&callback, selection_target(&pane, &mappings));
        }) as Box<dyn FnMut(MouseEvent)>);

        let callback = on_highlight;
        let on_mouseleave = Closure::wrap(Box::new(move |_event: MouseEvent| {
            // Pointer leaving the pane clears unconditionally, selection or
            // not.
            invoke_highlight(&callback, None);
        }) as Box<dyn FnMut(MouseEvent)>);

        root.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref())?;
        root.add_event_listener_with_callback(
            "mouseleave",
            on_mouseleave.as_ref().unchecked_ref(),
        )?;

        Ok(SelectionBinding {
            root,
            on_mouseup,
            on_mouseleave,
            attached: true,
        })
    }
}

#[wasm_bindgen]
impl SelectionBinding {
    /// Attach selection listeners to the report pane root.
    ///
    /// `on_highlight` is invoked with the mapped policy-section id after
    /// every selection release, or with `null` when the highlight should
    /// clear (short or unmapped selection, pointer leaving the pane).
    #[wasm_bindgen(constructor)]
    pub fn attach(
        root: HtmlElement,
        mappings_json: &str,
        on_highlight: js_sys::Function,
    ) -> Result<SelectionBinding, JsValue> {
        console_error_panic_hook::set_once();

        let mappings = mappings_from_json(mappings_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse mappings: {}", e)))?;
        Self::attach_with(root, mappings, on_highlight)
    }

    /// Remove the listeners. Safe to call more than once.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }

        let _ = self.root.remove_event_listener_with_callback(
            "mouseup",
            self.on_mouseup.as_ref().unchecked_ref(),
        );
        let _ = self.root.remove_event_listener_with_callback(
            "mouseleave",
            self.on_mouseleave.as_ref().unchecked_ref(),
        );
        self.attached = false;
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for SelectionBinding {
    fn drop(&mut self) {
        self.detach();
    }
}
