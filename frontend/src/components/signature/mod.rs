//! Freehand signature capture on a `<canvas>`.
//!
//! The pad draws strokes from pointer events; the owning component keeps a
//! `NodeRef` to the canvas and pulls the result out with [`capture_trimmed`]
//! when the form is submitted. A blank canvas captures as `None`, which is
//! how the workflow's empty-signature gates are fed.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct SignaturePad {
    drawing: bool,
}

#[derive(Properties, PartialEq)]
pub struct SignaturePadProps {
    /// Ref to the canvas node, owned by the parent so it can capture or
    /// clear the pad imperatively.
    pub canvas_ref: NodeRef,
    #[prop_or(500)]
    pub width: u32,
    #[prop_or(200)]
    pub height: u32,
}

pub enum Msg {
    Begin(f64, f64),
    Draw(f64, f64),
    End,
}

impl Component for SignaturePad {
    type Message = Msg;
    type Properties = SignaturePadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { drawing: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Begin(x, y) => {
                if let Some(pen) = context_of(&ctx.props().canvas_ref) {
                    pen.set_line_width(2.0);
                    pen.set_line_cap("round");
                    pen.set_line_join("round");
                    pen.set_stroke_style_str("#000");
                    pen.begin_path();
                    pen.move_to(x, y);
                    // A tap without movement still leaves a dot.
                    pen.line_to(x, y);
                    pen.stroke();
                    self.drawing = true;
                }
                false
            }
            Msg::Draw(x, y) => {
                if self.drawing {
                    if let Some(pen) = context_of(&ctx.props().canvas_ref) {
                        pen.line_to(x, y);
                        pen.stroke();
                    }
                }
                false
            }
            Msg::End => {
                self.drawing = false;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        html! {
            <canvas
                class="signature-canvas"
                ref={props.canvas_ref.clone()}
                width={props.width.to_string()}
                height={props.height.to_string()}
                onpointerdown={link.callback(|e: PointerEvent| {
                    Msg::Begin(e.offset_x() as f64, e.offset_y() as f64)
                })}
                onpointermove={link.callback(|e: PointerEvent| {
                    Msg::Draw(e.offset_x() as f64, e.offset_y() as f64)
                })}
                onpointerup={link.callback(|_: PointerEvent| Msg::End)}
                onpointerleave={link.callback(|_: PointerEvent| Msg::End)}
            />
        }
    }
}

fn canvas_of(canvas_ref: &NodeRef) -> Option<HtmlCanvasElement> {
    canvas_ref.cast::<HtmlCanvasElement>()
}

fn context_of(canvas_ref: &NodeRef) -> Option<CanvasRenderingContext2d> {
    canvas_of(canvas_ref)?
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Erases everything drawn on the pad.
pub fn clear(canvas_ref: &NodeRef) {
    if let (Some(canvas), Some(pen)) = (canvas_of(canvas_ref), context_of(canvas_ref)) {
        pen.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

/// Exports the drawn strokes cropped to their ink bounding box, as a PNG data
/// URL. Returns `None` when the canvas has no ink (or cannot be read).
pub fn capture_trimmed(canvas_ref: &NodeRef) -> Option<String> {
    let canvas = canvas_of(canvas_ref)?;
    let pen = context_of(canvas_ref)?;
    let (width, height) = (canvas.width(), canvas.height());

    let image = pen
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .ok()?;
    let pixels = image.data();

    // Bounding box of all pixels with a non-zero alpha channel.
    let (mut min_x, mut min_y) = (width, height);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut has_ink = false;
    for y in 0..height {
        for x in 0..width {
            let alpha = pixels[((y * width + x) * 4 + 3) as usize];
            if alpha != 0 {
                has_ink = true;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }
    if !has_ink {
        return None;
    }

    let trim_w = max_x - min_x + 1;
    let trim_h = max_y - min_y + 1;
    let trimmed = pen
        .get_image_data(min_x as f64, min_y as f64, trim_w as f64, trim_h as f64)
        .ok()?;

    let document = web_sys::window()?.document()?;
    let target: HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    target.set_width(trim_w);
    target.set_height(trim_h);
    let target_pen = target
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    target_pen.put_image_data(&trimmed, 0.0, 0.0).ok()?;

    target.to_data_url().ok()
}
