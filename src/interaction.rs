//! Pointer and wheel interaction: pan and zoom over a plot.
//!
//! The controller consumes host input events expressed in surface pixel
//! coordinates and turns them into range mutations on a [`Plot`]. It owns
//! nothing but the pointer state machine; the host forwards events and
//! repaints when `handle` reports that a redraw is needed.

use crate::error::RangeError;
use crate::geom::ScreenPoint;
use crate::plot::Plot;

/// Input events consumed by the controller, in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// Pointer position.
        pos: ScreenPoint,
    },
    /// Pointer moved while pressed.
    PointerDrag {
        /// Pointer position.
        pos: ScreenPoint,
    },
    /// Pointer released or capture lost.
    PointerUp,
    /// Wheel scrolled. Deltas are per-axis zoom offsets; a delta of zero on
    /// both axes is ignored.
    Wheel {
        /// Horizontal wheel delta.
        delta_x: f32,
        /// Vertical wheel delta.
        delta_y: f32,
        /// Pointer position at scroll time.
        pos: ScreenPoint,
    },
    /// Drawable surface resized.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerState {
    Idle,
    Dragging { anchor: ScreenPoint },
}

/// Translates pointer and wheel events into plot pan/zoom updates.
#[derive(Debug, Clone)]
pub struct Controller {
    state: PointerState,
}

impl Controller {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            state: PointerState::Idle,
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    /// Feed one event. Returns whether the host should repaint.
    pub fn handle(&mut self, plot: &mut Plot, event: InputEvent) -> Result<bool, RangeError> {
        match event {
            InputEvent::PointerDown { pos } => {
                self.state = PointerState::Dragging { anchor: pos };
                Ok(false)
            }
            InputEvent::PointerUp => {
                self.state = PointerState::Idle;
                Ok(false)
            }
            InputEvent::PointerDrag { pos } => {
                let PointerState::Dragging { anchor } = self.state else {
                    return Ok(false);
                };
                // Subtracting the pointer motion makes content follow the
                // pointer: dragging right pulls the curve right.
                let (delta_x, delta_y) = {
                    let Some(transform) = plot.transform() else {
                        return Ok(false);
                    };
                    (
                        transform.to_data_x(anchor.x) - transform.to_data_x(pos.x),
                        transform.to_data_y(anchor.y) - transform.to_data_y(pos.y),
                    )
                };
                self.state = PointerState::Dragging { anchor: pos };
                plot.pan(delta_x, delta_y)?;
                Ok(true)
            }
            InputEvent::Wheel {
                delta_x,
                delta_y,
                pos,
            } => {
                if delta_x == 0.0 && delta_y == 0.0 {
                    return Ok(false);
                }
                let Some((width, height)) = plot.pixel_size() else {
                    return Ok(false);
                };
                let split_x = f64::from(pos.x) / f64::from(width);
                let split_y = f64::from(pos.y) / f64::from(height);
                plot.zoom(
                    split_x,
                    split_y,
                    1.0 + f64::from(delta_x),
                    1.0 + f64::from(delta_y),
                )?;
                Ok(true)
            }
            InputEvent::Resize { width, height } => {
                plot.set_pixel_size(width, height)?;
                Ok(true)
            }
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_plot() -> Plot {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        plot.set_pixel_size(640, 320).unwrap();
        plot
    }

    #[test]
    fn drag_pans_content_with_pointer() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();

        let down = InputEvent::PointerDown {
            pos: ScreenPoint::new(300.0, 150.0),
        };
        assert!(!controller.handle(&mut plot, down).unwrap());
        assert!(controller.is_dragging());

        let before = plot.data_range().unwrap();
        let drag = InputEvent::PointerDrag {
            pos: ScreenPoint::new(355.0, 150.0),
        };
        assert!(controller.handle(&mut plot, drag).unwrap());
        let after = plot.data_range().unwrap();
        // Dragging right moves the visible range left.
        assert!(after.x.min < before.x.min);
        assert!((after.x.span() - before.x.span()).abs() < 1e-9);
        assert_eq!(after.y, before.y);
    }

    #[test]
    fn drag_without_pointer_down_is_ignored() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();
        let before = plot.data_range().unwrap();
        let drag = InputEvent::PointerDrag {
            pos: ScreenPoint::new(100.0, 100.0),
        };
        assert!(!controller.handle(&mut plot, drag).unwrap());
        assert_eq!(plot.data_range().unwrap(), before);
    }

    #[test]
    fn pointer_up_returns_to_idle() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();
        controller
            .handle(
                &mut plot,
                InputEvent::PointerDown {
                    pos: ScreenPoint::new(0.0, 0.0),
                },
            )
            .unwrap();
        controller.handle(&mut plot, InputEvent::PointerUp).unwrap();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn wheel_zooms_around_pointer() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();
        let before = plot.data_range().unwrap();
        let wheel = InputEvent::Wheel {
            delta_x: -0.1,
            delta_y: -0.1,
            pos: ScreenPoint::new(320.0, 160.0),
        };
        assert!(controller.handle(&mut plot, wheel).unwrap());
        let after = plot.data_range().unwrap();
        assert!(after.x.span() < before.x.span());
        assert!(after.y.span() < before.y.span());
    }

    #[test]
    fn zero_delta_wheel_is_ignored() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();
        let before = plot.data_range().unwrap();
        let wheel = InputEvent::Wheel {
            delta_x: 0.0,
            delta_y: 0.0,
            pos: ScreenPoint::new(320.0, 160.0),
        };
        assert!(!controller.handle(&mut plot, wheel).unwrap());
        assert_eq!(plot.data_range().unwrap(), before);
    }

    #[test]
    fn excessive_wheel_delta_is_rejected() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();
        let wheel = InputEvent::Wheel {
            delta_x: -1.5,
            delta_y: 0.0,
            pos: ScreenPoint::new(320.0, 160.0),
        };
        assert!(controller.handle(&mut plot, wheel).is_err());
    }

    #[test]
    fn resize_updates_pixel_size() {
        let mut plot = ready_plot();
        let mut controller = Controller::new();
        let resize = InputEvent::Resize {
            width: 800,
            height: 600,
        };
        assert!(controller.handle(&mut plot, resize).unwrap());
        assert_eq!(plot.pixel_size(), Some((800, 600)));
    }
}
