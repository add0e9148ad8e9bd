//! Morphing stepper example
//!
//! Opens a window holding one morphing button. Frames are painted into a
//! `PaintList` and logged, so run with `RUST_LOG=debug` to follow the morph.
//!
//! Controls:
//! - Click or tap the button to add one
//! - Click the round button on the left to remove one
//! - ESC: quit

use morph_gui::{catppuccin::mocha, BuiltinResources, PaintCommand, PaintList};
use morph_gui_interactive::{MorphingButton, MorphingButtonConfig, SizeConstraint};
use morph_gui_text::CosmicLayouter;
use morph_gui_winit::{device_metrics, dispatch_window_event, pump_frame, PointerTracker};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct Stepper {
    window: Option<Arc<Window>>,
    button: Option<MorphingButton>,
    tracker: PointerTracker,
    canvas: PaintList,
}

impl Stepper {
    fn new() -> Self {
        Self {
            window: None,
            button: None,
            tracker: PointerTracker::new(),
            canvas: PaintList::new(),
        }
    }

    fn measure(&mut self) {
        let (Some(window), Some(button)) = (&self.window, &mut self.button) else {
            return;
        };
        let size = window.inner_size();
        button.measure(
            SizeConstraint::Exactly(size.width as f32),
            SizeConstraint::AtMost(size.height as f32),
        );
    }

    fn render(&mut self) {
        let (Some(window), Some(button)) = (&self.window, &mut self.button) else {
            return;
        };

        let frame = pump_frame(button, Instant::now());
        if frame.paint {
            self.canvas.clear();
            button.paint(&mut self.canvas);
            log_frame(&self.canvas);
        }
        if frame.request_redraw {
            window.request_redraw();
        }
    }
}

fn log_frame(canvas: &PaintList) {
    for command in canvas.commands() {
        match command {
            PaintCommand::RoundRect { rect, radius, .. } => {
                log::debug!("rect {:?}..{:?} radius {radius:.1}", rect.min, rect.max);
            }
            PaintCommand::Bitmap { placement, .. } => {
                log::debug!(
                    "icon at {:?} rotated {:.1} alpha {}",
                    placement.dest.min,
                    placement.rotation_degrees,
                    placement.alpha
                );
            }
            PaintCommand::Text { lines, origin, .. } => {
                log::debug!("text {lines:?} at ({:.1}, {:.1})", origin.x, origin.y);
            }
        }
    }
}

impl ApplicationHandler for Stepper {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Morphing Stepper - Morph GUI")
            .with_inner_size(winit::dpi::LogicalSize::new(420, 120));
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let config = MorphingButtonConfig::default()
            .with_label("Adult")
            .with_color(mocha::MAUVE);
        let button = MorphingButton::new(
            config,
            &device_metrics(&window),
            &BuiltinResources,
            CosmicLayouter::new(),
        );
        match button {
            Ok(button) => {
                self.button =
                    Some(button.on_quantity_changed(|quantity| log::info!("quantity: {quantity}")));
            }
            Err(err) => {
                log::error!("invalid button configuration: {err}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window.clone());
        self.measure();
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(button) = &mut self.button {
            if dispatch_window_event(button, &mut self.tracker, &event, Instant::now()) {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if matches!(
                key_event.physical_key,
                winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
            ) && key_event.state == ElementState::Pressed =>
            {
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                self.measure();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = Stepper::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
