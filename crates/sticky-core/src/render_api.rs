use smallvec::SmallVec;

use crate::view::{Scene, SceneNode};
use crate::Transform;

/// Drawing surface handed to overlays by the host list.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn draw(&mut self, node: &SceneNode);
}

/// Records into a [`Scene`], baking the current translation into each node.
pub struct SceneCanvas<'a> {
    scene: &'a mut Scene,
    current: Transform,
    saved: SmallVec<[Transform; 4]>,
}

impl<'a> SceneCanvas<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            current: Transform::identity(),
            saved: SmallVec::new(),
        }
    }

    pub fn transform(&self) -> Transform {
        self.current
    }

    pub fn save_count(&self) -> usize {
        self.saved.len()
    }
}

impl Canvas for SceneCanvas<'_> {
    fn save(&mut self) {
        self.saved.push(self.current);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(t) => self.current = t,
            None => log::warn!("restore with empty save stack"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.combine(&Transform::translate(dx, dy));
    }

    fn draw(&mut self, node: &SceneNode) {
        self.scene
            .nodes
            .push(node.translated(self.current.translate_x, self.current.translate_y));
    }
}
