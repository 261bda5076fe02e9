use crate::dom;
use folio_core::{
    kind_for_tag, Canvas2d, RegistryError, Rgba, StrokeStyle, Surface, SurfaceRect,
    SurfaceState,
};
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::PREVIEW_KIND_ATTR;

#[derive(Debug)]
pub enum AttachError {
    Tag(RegistryError),
    NoContext,
}

/// A preview canvas with its 2D context. Size and pointer state live behind
/// an `Rc<RefCell<_>>` so DOM callbacks can update them between frames.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    state: Rc<RefCell<SurfaceState>>,
    _observer: Option<web::ResizeObserver>,
}

impl CanvasSurface {
    /// Resolve the preview tag, grab a 2D context and start tracking size and
    /// pointer. Untagged canvases and canvases without a context are rejected.
    pub fn attach(canvas: web::HtmlCanvasElement) -> Result<Self, AttachError> {
        let kind = kind_for_tag(canvas.get_attribute(PREVIEW_KIND_ATTR).as_deref())
            .map_err(AttachError::Tag)?;
        let ctx = context_2d(&canvas).ok_or(AttachError::NoContext)?;
        let state = Rc::new(RefCell::new(SurfaceState::new(Some(kind))));

        resize(&canvas, &ctx, &state);
        let observer = observe_resize(&canvas, &ctx, &state);
        wire_pointer(&canvas, &state);

        Ok(Self {
            ctx,
            state,
            _observer: observer,
        })
    }

    fn set_stroke(&self, style: StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color.css());
        self.ctx.set_line_width(style.width as f64);
    }
}

pub fn client_rect(el: &web::Element) -> SurfaceRect {
    let r = el.get_bounding_client_rect();
    SurfaceRect::new(r.left(), r.top(), r.width(), r.height())
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    let opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(&opts, &JsValue::from_str("alpha"), &JsValue::TRUE);
    _ = js_sys::Reflect::set(&opts, &JsValue::from_str("desynchronized"), &JsValue::TRUE);
    let ctx = canvas
        .get_context_with_context_options("2d", &opts)
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    Some(ctx)
}

fn resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    state: &Rc<RefCell<SurfaceState>>,
) {
    let raw_dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = client_rect(canvas);
    let (backing, dpr) = {
        let mut s = state.borrow_mut();
        let backing = s.measure(&rect, raw_dpr);
        (backing, s.dpr)
    };
    canvas.set_width(backing.width);
    canvas.set_height(backing.height);
    // Resizing the backing store resets the transform.
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    log::debug!(
        "[surface] {}x{} @ {:.2} -> {}x{}",
        rect.width,
        rect.height,
        dpr,
        backing.width,
        backing.height
    );
}

fn observe_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    state: &Rc<RefCell<SurfaceState>>,
) -> Option<web::ResizeObserver> {
    let (canvas_cb, ctx_cb, state_cb) = (canvas.clone(), ctx.clone(), state.clone());
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        resize(&canvas_cb, &ctx_cb, &state_cb);
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref()).ok()?;
    closure.forget();
    observer.observe(canvas);
    Some(observer)
}

fn wire_pointer(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SurfaceState>>) {
    let target: &web::EventTarget = canvas.as_ref();
    {
        let (canvas, state) = (canvas.clone(), state.clone());
        dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
            let rect = client_rect(&canvas);
            state
                .borrow_mut()
                .pointer_moved(ev.client_x() as f64, ev.client_y() as f64, &rect);
        });
    }
    {
        let state = state.clone();
        dom::listen(target, "pointerenter", move |_: web::PointerEvent| {
            state.borrow_mut().pointer_entered();
        });
    }
    {
        let state = state.clone();
        dom::listen(target, "pointerleave", move |_: web::PointerEvent| {
            state.borrow_mut().pointer_left();
        });
    }
}

impl Canvas2d for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, style: StrokeStyle) {
        self.set_stroke(style);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, style: StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_stroke(style);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        if closed {
            self.ctx.close_path();
        }
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn state(&self) -> SurfaceState {
        *self.state.borrow()
    }
}
