use backdrop_core::surface::{Blend, Fill, Glow, Path, PathSeg, Stroke};
use backdrop_core::{Bounds, Rgba, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a `CanvasRenderingContext2d`. Effects draw in CSS pixels;
/// `clear` rescales the context to whatever the backing store currently is.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    fn trace(&self, path: &Path) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for seg in path.segments() {
            match *seg {
                PathSeg::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
                PathSeg::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
                PathSeg::QuadTo { ctrl, to } => {
                    ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
                }
                PathSeg::Close => ctx.close_path(),
            }
        }
    }

    fn set_fill(&self, fill: &Fill) {
        let ctx = &self.ctx;
        match fill {
            Fill::Solid(color) => ctx.set_fill_style_str(&color.to_css()),
            Fill::Linear { from, to, stops } => {
                let g = ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                for s in stops {
                    _ = g.add_color_stop(s.offset, &s.color.to_css());
                }
                ctx.set_fill_style_canvas_gradient(&g);
            }
            Fill::Radial {
                center,
                radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                match ctx.create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64) {
                    Ok(g) => {
                        for s in stops {
                            _ = g.add_color_stop(s.offset, &s.color.to_css());
                        }
                        ctx.set_fill_style_canvas_gradient(&g);
                    }
                    Err(e) => log::trace!("[surface] radial gradient rejected: {:?}", e),
                }
            }
        }
    }

    fn set_glow(&self, glow: Option<&Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur as f64);
                self.ctx.set_shadow_color(&g.color.to_css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        let sx = self.canvas.width() as f64 / bounds.width() as f64;
        let sy = self.canvas.height() as f64 / bounds.height() as f64;
        _ = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
        _ = self.ctx.set_global_composite_operation("source-over");
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_filter("none");
        self.ctx
            .clear_rect(0.0, 0.0, bounds.width() as f64, bounds.height() as f64);
    }

    fn fill_circle(&mut self, center: glam::Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        ctx.set_fill_style_str(&color.to_css());
        self.set_glow(glow.as_ref());
        ctx.fill();
        if glow.is_some() {
            self.set_glow(None);
        }
    }

    fn stroke_line(
        &mut self,
        from: glam::Vec2,
        to: glam::Vec2,
        color: Rgba,
        width: f32,
        opacity: f32,
    ) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(width as f64);
        ctx.set_global_alpha(opacity.clamp(0.0, 1.0) as f64);
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        if path.is_empty() {
            return;
        }
        self.trace(path);
        self.set_fill(fill);
        self.ctx.fill();
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if path.is_empty() {
            return;
        }
        self.trace(path);
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&stroke.color.to_css());
        ctx.set_line_width(stroke.width as f64);
        ctx.set_line_cap(if stroke.round_cap { "round" } else { "butt" });
        self.set_glow(stroke.glow.as_ref());
        ctx.stroke();
        if stroke.glow.is_some() {
            self.set_glow(None);
        }
    }

    fn fill_rect(&mut self, bounds: Bounds, fill: &Fill, blend: Blend) {
        let op = match blend {
            Blend::SourceOver => "source-over",
            Blend::Additive => "lighter",
        };
        _ = self.ctx.set_global_composite_operation(op);
        self.set_fill(fill);
        self.ctx
            .fill_rect(0.0, 0.0, bounds.width() as f64, bounds.height() as f64);
        if blend != Blend::SourceOver {
            _ = self.ctx.set_global_composite_operation("source-over");
        }
    }

    fn set_blur(&mut self, px: f32) {
        if px > 0.0 {
            self.ctx.set_filter(&format!("blur({px}px)"));
        } else {
            self.ctx.set_filter("none");
        }
    }
}
