use crate::app::App;

mod app;
mod components;
mod overlay;
mod storage;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
