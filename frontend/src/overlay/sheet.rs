//! Full-screen overlay sheet used for the signature modal, the signed-term
//! viewer, and the PDF dialog. Visibility is toggled through the `show` CSS
//! class so the open/close transition stays in the stylesheet.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct OverlaySheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for OverlaySheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: NodeRef) {
    toggle_sheet(sheet_ref, "add");
}

pub fn close_sheet(sheet_ref: NodeRef) {
    toggle_sheet(sheet_ref, "remove");
}

// The class flip runs on a short timeout so it lands after the current render,
// letting the CSS transition fire on freshly mounted sheets too.
fn toggle_sheet(sheet_ref: NodeRef, op: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            sheet.id(),
            op
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
