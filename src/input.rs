use crate::constants::CLICK_SLOP_PX;
use fnv::FnvHashMap;
use glam::Vec2;

/// What a pointer movement should do to the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    None,
    Orbit { dx: f32, dy: f32 },
    Pinch { previous: f32, current: f32 },
}

#[derive(Clone, Copy, Debug)]
struct ActivePointer {
    position: Vec2,
    down_at: Vec2,
}

/// Only the main button (left mouse, touch contact, pen tip) orbits or
/// clicks; `MouseEvent.button` is 0 for all of them.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}

/// Tracks pressed pointers so drags, pinches and clicks can be told apart.
#[derive(Default, Debug)]
pub struct PointerTracker {
    active: FnvHashMap<i32, ActivePointer>,
    primary: Option<i32>,
    moved_far: bool,
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn down(&mut self, id: i32, pos: Vec2) {
        if self.active.is_empty() {
            self.primary = Some(id);
            self.moved_far = false;
        } else {
            // a second finger turns the gesture into a pinch, never a click
            self.moved_far = true;
        }
        self.active.insert(
            id,
            ActivePointer {
                position: pos,
                down_at: pos,
            },
        );
        self.last = Some(pos);
    }

    pub fn moved(&mut self, id: i32, pos: Vec2) -> Gesture {
        self.last = Some(pos);
        let spread_before = self.spread();
        let Some(p) = self.active.get_mut(&id) else {
            return Gesture::None;
        };
        let delta = pos - p.position;
        p.position = pos;
        if pos.distance(p.down_at) > CLICK_SLOP_PX {
            self.moved_far = true;
        }
        match (self.active.len(), spread_before, self.spread()) {
            (1, _, _) => Gesture::Orbit {
                dx: delta.x,
                dy: delta.y,
            },
            (_, Some(previous), Some(current)) => Gesture::Pinch { previous, current },
            _ => Gesture::None,
        }
    }

    /// Release a pointer. Returns the release position when the press counts
    /// as a click: primary pointer, single touch, no travel beyond the slop.
    pub fn up(&mut self, id: i32, pos: Vec2) -> Option<Vec2> {
        self.last = Some(pos);
        let released = self.active.remove(&id)?;
        let was_primary = self.primary == Some(id);
        if self.active.is_empty() {
            self.primary = None;
        }
        let clicked = was_primary
            && !self.moved_far
            && pos.distance(released.down_at) <= CLICK_SLOP_PX;
        clicked.then_some(pos)
    }

    pub fn cancel(&mut self, id: i32) {
        self.active.remove(&id);
        self.moved_far = true;
        if self.active.is_empty() {
            self.primary = None;
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.primary = None;
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        !self.active.is_empty()
    }

    /// Last known pointer position over the canvas.
    pub fn last_position(&self) -> Option<Vec2> {
        self.last
    }

    pub fn forget_position(&mut self) {
        self.last = None;
    }

    fn spread(&self) -> Option<f32> {
        let mut it = self.active.values();
        let a = it.next()?;
        let b = it.next()?;
        Some(a.position.distance(b.position))
    }
}

#[cfg(target_arch = "wasm32")]
mod web_helpers {
    use glam::Vec2;
    use web_sys as web;

    #[inline]
    pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        let w = (rect.width() as f32).max(1.0);
        let h = (rect.height() as f32).max(1.0);
        Vec2::new(
            x_css / w * canvas.width() as f32,
            y_css / h * canvas.height() as f32,
        )
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_helpers::pointer_canvas_px;
