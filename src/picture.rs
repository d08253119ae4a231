use std::error::Error;

use image::{ImageBuffer, RgbImage};
use show_image::{
    create_window,
    event::{VirtualKeyCode, WindowEvent},
    BoxImage, ImageInfo,
};

use crate::constants::DISPLAY_WINDOW_TITLE;

// (0, 0) is the bottom left corner of the picture
pub struct Picture {
    pub xres: usize,
    pub yres: usize,
    pub max_color: usize,
    pub data: Vec<u8>,
    background: (usize, usize, usize),
}

impl Picture {
    pub fn new(xres: usize, yres: usize, max_color: usize, background: &(usize, usize, usize)) -> Self {
        let mut picture = Self {
            xres,
            yres,
            max_color,
            data: vec![0; xres * yres * 3],
            background: *background,
        };

        picture.clear();
        picture
    }

    pub fn clear(&mut self) {
        let (r, g, b) = self.scale_color(&self.background);

        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&[r, g, b]);
        }
    }

    // colors are given on a 0..=max_color scale and stored as bytes
    fn scale_color(&self, color: &(usize, usize, usize)) -> (u8, u8, u8) {
        let scale = |c: usize| (c.min(self.max_color) * 255 / self.max_color.max(1)) as u8;
        (scale(color.0), scale(color.1), scale(color.2))
    }

    pub fn plot(&mut self, x: isize, y: isize, color: &(usize, usize, usize)) {
        if x < 0 || y < 0 || x >= self.xres as isize || y >= self.yres as isize {
            return;
        }

        let row = self.yres - 1 - y as usize;
        let i = (row * self.xres + x as usize) * 3;
        let (r, g, b) = self.scale_color(color);

        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: isize, y: isize) -> Option<(u8, u8, u8)> {
        if x < 0 || y < 0 || x >= self.xres as isize || y >= self.yres as isize {
            return None;
        }

        let row = self.yres - 1 - y as usize;
        let i = (row * self.xres + x as usize) * 3;

        Some((self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    // Cohen-Sutherland against the pixel grid so huge endpoints never get stepped through.
    // Clipped endpoints land exactly on the boundary they were clipped to.
    fn clip_line(&self, x0: isize, y0: isize, x1: isize, y1: isize) -> Option<(i64, i64, i64, i64)> {
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const BOTTOM: u8 = 4;
        const TOP: u8 = 8;

        if self.xres == 0 || self.yres == 0 {
            return None;
        }

        let x_max = (self.xres - 1) as f64;
        let y_max = (self.yres - 1) as f64;

        let outcode = |x: f64, y: f64| {
            let mut code = 0;
            if x < 0.0 { code |= LEFT; } else if x > x_max { code |= RIGHT; }
            if y < 0.0 { code |= BOTTOM; } else if y > y_max { code |= TOP; }
            code
        };

        let (mut x0, mut y0, mut x1, mut y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);

        // every pass settles at least one boundary of one endpoint
        for _ in 0..8 {
            let code0 = outcode(x0, y0);
            let code1 = outcode(x1, y1);

            if code0 | code1 == 0 {
                let pixel_x = |x: f64| x.round().clamp(0.0, x_max) as i64;
                let pixel_y = |y: f64| y.round().clamp(0.0, y_max) as i64;

                return Some((pixel_x(x0), pixel_y(y0), pixel_x(x1), pixel_y(y1)));
            }

            if code0 & code1 != 0 {
                return None;
            }

            let code = if code0 != 0 { code0 } else { code1 };
            let (x, y) = if code & TOP != 0 {
                (x0 + (x1 - x0) * (y_max - y0) / (y1 - y0), y_max)
            } else if code & BOTTOM != 0 {
                (x0 + (x1 - x0) * (0.0 - y0) / (y1 - y0), 0.0)
            } else if code & RIGHT != 0 {
                (x_max, y0 + (y1 - y0) * (x_max - x0) / (x1 - x0))
            } else {
                (0.0, y0 + (y1 - y0) * (0.0 - x0) / (x1 - x0))
            };

            if code == code0 {
                (x0, y0) = (x, y);
            } else {
                (x1, y1) = (x, y);
            }
        }

        None
    }

    pub fn draw_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: &(usize, usize, usize)) {
        let Some((mut x0, mut y0, mut x1, mut y1)) = self.clip_line(x0, y0, x1, y1) else {
            return;
        };

        // always draw left to right
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;

        if dy.abs() <= dx {
            // octants 1 and 8: step along x
            let step_y = if dy < 0 { -1 } else { 1 };
            let a = 2 * dy.abs();
            let b = -2 * dx;
            let mut d = a + b / 2;
            let mut y = y0;

            for x in x0..=x1 {
                self.plot(x as isize, y as isize, color);

                if d > 0 {
                    y += step_y;
                    d += b;
                }
                d += a;
            }
        } else {
            // octants 2 and 7: step along y
            let step_y = if dy < 0 { -1 } else { 1 };
            let a = 2 * dx;
            let b = -2 * dy.abs();
            let mut d = a + b / 2;
            let mut x = x0;
            let mut y = y0;

            loop {
                self.plot(x as isize, y as isize, color);

                if y == y1 { break; }

                if d > 0 {
                    x += 1;
                    d += b;
                }
                d += a;
                y += step_y;
            }
        }
    }

    fn to_image(&self) -> Result<RgbImage, Box<dyn Error>> {
        ImageBuffer::from_raw(self.xres as u32, self.yres as u32, self.data.clone())
            .ok_or_else(|| "Picture buffer does not match its dimensions".into())
    }

    /// Writes the picture to `file_path`; the extension picks the encoding.
    pub fn save_as_file(&self, file_path: &str) -> Result<(), Box<dyn Error>> {
        self.to_image()?.save(file_path)?;
        log::info!("Saved picture to '{}'.", file_path);

        Ok(())
    }

    /// Opens a window with the picture and blocks until it is closed or
    /// escape is pressed.
    pub fn display(&self) -> Result<(), Box<dyn Error>> {
        let image = BoxImage::new(ImageInfo::rgb8(self.xres as u32, self.yres as u32), self.data.clone().into_boxed_slice());
        let window = create_window(DISPLAY_WINDOW_TITLE, Default::default())?;
        window.set_image("picture", image)?;

        for event in window.event_channel()? {
            match event {
                WindowEvent::KeyboardInput(event) => {
                    if event.input.key_code == Some(VirtualKeyCode::Escape) && event.input.state.is_pressed() {
                        break;
                    }
                }
                WindowEvent::CloseRequested(_) => break,
                _ => {}
            }
        }

        Ok(())
    }
}
