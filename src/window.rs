use anyhow::{ anyhow, Result };
use minifb::{ Key, Window, WindowOptions };

use crate::canvas::Canvas;

/// How often the finished frame is pushed to the surface while waiting for a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentMode {
    /// Present once, then only pump events
    Once,
    /// Present again on every loop iteration
    EveryFrame
}

/// Something a canvas can be shown on
pub trait Surface {
    /// Uploads the canvas and presents it. Also processes pending events.
    fn present(&mut self, canvas: &Canvas) -> Result<()>;

    /// Processes pending events without touching the displayed frame
    fn pump_events(&mut self);

    fn close_requested(&self) -> bool;
}

pub struct MinifbSurface {
    window: Window
}

impl MinifbSurface {
    pub fn open(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| anyhow!("Window could not be created: {}", e))?;

        // Limit to max ~60 fps update rate
        window.set_target_fps(60);

        log::debug!("Opened {}x{} window '{}'", width, height, title);

        Ok(MinifbSurface { window })
    }
}

impl Surface for MinifbSurface {
    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.window
            .update_with_buffer(canvas.buffer(), canvas.width(), canvas.height())
            .map_err(|e| anyhow!("Couldn't update window buffer: {}", e))
    }

    fn pump_events(&mut self) {
        self.window.update();
    }

    fn close_requested(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }
}

/// Shows `canvas` on `surface` until a close request arrives. Returns how many times it was presented.
pub fn window_loop<S>(surface: &mut S, canvas: &Canvas, mode: PresentMode) -> Result<usize>
where
    S: Surface + ?Sized
{
    surface.present(canvas)?;
    let mut presents = 1;

    while !surface.close_requested() {
        match mode {
            PresentMode::EveryFrame => {
                surface.present(canvas)?;
                presents += 1;
            },
            PresentMode::Once => surface.pump_events()
        }
    }

    log::info!("Close requested after {} presents", presents);

    Ok(presents)
}
