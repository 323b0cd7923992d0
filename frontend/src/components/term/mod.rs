//! Equipment-responsibility-term wizard: root module wiring the Yew
//! `Component` implementation with submodules for state, update logic, view
//! rendering, and helpers.
//!
//! The four steps (cadastro, prévia, assinatura, conclusão) are driven by
//! `common::workflow::TermWorkflow`; this component owns only the
//! browser-side concerns: signature pads, overlay sheets, and the PDF export
//! dialog.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TermComponent;

impl Component for TermComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TermComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
