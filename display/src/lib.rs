use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;
use thiserror::Error;

use octet::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use octet::FrameBuffer;

/// Bytes per pixel in an RGB24 texture
const CHANNELS: usize = 3;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl2: {0}")]
    Sdl(String),
}

fn sdl_error(e: impl ToString) -> DisplayError {
    DisplayError::Sdl(e.to_string())
}

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array.
/// The display only gets a call to `render` when the Chip-8 raises its draw flag.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Opens a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;

        Ok(Display { canvas })
    }

    /// Formats a Chip-8 FrameBuffer as RGB24 bytes.
    ///
    /// Rows are concatenated top to bottom and every pixel becomes three equal channels,
    /// 0xFF when set and 0x00 when unset.
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flatten()
            .flat_map(|&pixel| [if pixel != 0 { 0xFF } else { 0x00 }; CHANNELS])
            .collect()
    }

    /// Uploads the frame as a streaming texture and presents it, stretched to the window.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(sdl_error)?;

        let pixels = Display::frame_to_texture(frame);
        texture
            .update(None, &pixels, DISPLAY_WIDTH * CHANNELS)
            .map_err(sdl_error)?;

        self.canvas.copy(&texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}
