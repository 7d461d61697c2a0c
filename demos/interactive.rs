//! Interactive Demo - A three-slide carousel in the terminal
//!
//! Demonstrates the pieces working together:
//! - Headless slides implementing ActiveMarkerTarget
//! - Previous/next controls driven by keys
//! - Arrow-key navigation through handle_keyboard
//! - Auto-play on the host-driven clock
//!
//! Keys: Left/Right arrows navigate, `b`/`n` activate the prev/next
//! controls, `p` toggles auto-play, `q` or Escape quits.
//!
//! Run with: cargo run --example interactive

use std::cell::RefCell;
use std::io::{Write, stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use carousel_tui::{
    ActiveMarkerTarget, Control, InputEvent, SlideController, SlideHandle, SliderContainer,
    SliderOptions, poll_event,
};

struct DemoSlide {
    label: &'static str,
    active: bool,
}

impl ActiveMarkerTarget for DemoSlide {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

fn render(slides: &[Rc<RefCell<DemoSlide>>], controller: &SlideController) -> std::io::Result<()> {
    let mut line = String::new();
    for slide in slides {
        let slide = slide.borrow();
        if slide.active {
            line.push_str("[ ");
            line.push_str(slide.label);
            line.push_str(" ] ");
        } else {
            line.push_str("  ");
            line.push_str(slide.label);
            line.push_str("   ");
        }
    }
    let auto = if controller.is_auto_playing() {
        "on "
    } else {
        "off"
    };
    print!("\r{line}  auto-play: {auto}  ");
    stdout().flush()
}

fn main() -> std::io::Result<()> {
    let slides: Vec<Rc<RefCell<DemoSlide>>> = ["Aurora", "Basalt", "Cirrus"]
        .into_iter()
        .map(|label| {
            Rc::new(RefCell::new(DemoSlide {
                label,
                active: false,
            }))
        })
        .collect();

    // The host supplies the initial marker
    slides[0].borrow_mut().active = true;

    let prev = Control::new();
    let next = Control::new();
    let handles: Vec<SlideHandle> = slides.iter().map(|s| s.clone() as SlideHandle).collect();
    let container = SliderContainer::with_controls(handles, Some(prev.clone()), Some(next.clone()));

    let controller = SlideController::with_options(
        container,
        SliderOptions {
            auto_play_delay: Duration::from_millis(2000),
            restart_on_interaction: true,
        },
    );

    println!("carousel-tui demo - arrows navigate, b/n are the controls, p toggles auto-play, q quits");
    enable_raw_mode()?;
    render(&slides, &controller)?;

    let mut last_tick = Instant::now();
    loop {
        if let Some(InputEvent::Key(event)) = poll_event(Duration::from_millis(50))? {
            match event.key.as_str() {
                "q" | "Escape" => break,
                "b" => prev.activate(),
                "n" => next.activate(),
                "p" => {
                    if controller.is_auto_playing() {
                        controller.stop_auto_play();
                    } else {
                        controller.start_auto_play();
                    }
                }
                _ => controller.handle_keyboard(&event),
            }
        }

        let now = Instant::now();
        controller.advance(now - last_tick);
        last_tick = now;

        render(&slides, &controller)?;
    }

    disable_raw_mode()?;
    println!();
    Ok(())
}
