// Drawing seam between the simulation and the page. The field only ever clears,
// strokes connection lines, and fills glowing dots, so that is all a Surface has to do.
// CanvasRenderer forwards those calls to a 2D canvas context.

use crate::color::Color;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Called once per frame before any `stroke_line`.
    fn set_line_style(&mut self, style: &str, width: f64) -> Result<(), Self::Error>;

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        glow_blur: f64,
    ) -> Result<(), Self::Error>;
}

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2D context from a canvas on the DOM
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasRenderer { context })
    }
}

impl Surface for CanvasRenderer {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn set_line_style(&mut self, style: &str, width: f64) -> Result<(), JsValue> {
        // glow left over from the previous frame's last dot would smear every line
        self.context.set_shadow_blur(0.0);
        self.context.set_stroke_style(&JsValue::from_str(style));
        self.context.set_line_width(width);
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        glow_blur: f64,
    ) -> Result<(), JsValue> {
        let css = JsValue::from_str(&color.to_css());
        self.context.set_shadow_blur(glow_blur);
        self.context.set_shadow_color(&color.to_css());
        self.context.set_fill_style(&css);
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}
