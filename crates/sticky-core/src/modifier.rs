use crate::{Color, EdgeInsets};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

/// How a header root wants to be sized by the list that hosts it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Exact(f32),
    MatchParent,
    WrapContent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Option<EdgeInsets>,
    pub min_height: Option<f32>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    /// Only read on the root of a header tree.
    pub layout_params: Option<LayoutParams>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(EdgeInsets::all(v));
        self
    }
    pub fn min_height(mut self, h: f32) -> Self {
        self.min_height = Some(h);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn layout_params(mut self, params: LayoutParams) -> Self {
        self.layout_params = Some(params);
        self
    }
}
