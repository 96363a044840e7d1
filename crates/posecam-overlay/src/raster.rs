use crate::surface::{Color, Surface};

/// Packed RGB raster, 3 bytes per pixel, row-major.
#[derive(Debug, Clone)]
pub struct RgbSurface {
    width: usize,
    height: usize,
    background: Color,
    buf: Vec<u8>,
}

impl RgbSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, Color::BLACK)
    }

    pub fn with_background(width: usize, height: usize, background: Color) -> Self {
        let mut surface = Self {
            width,
            height,
            background,
            buf: vec![0; width * height * 3],
        };
        surface.clear();
        surface
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some(Color::rgb(self.buf[idx], self.buf[idx + 1], self.buf[idx + 2]))
    }

    /// Packed `0x00RRGGBB` pixels, the layout minifb windows expect.
    pub fn to_argb(&self) -> Vec<u32> {
        self.buf
            .chunks_exact(3)
            .map(|px| Color::rgb(px[0], px[1], px[2]).to_u32())
            .collect()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.buf[idx] = color.r;
        self.buf[idx + 1] = color.g;
        self.buf[idx + 2] = color.b;
    }

    /// Filled disc, visiting only the part of its bounding box that lies on the raster.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let (cx, cy, r) = (cx as i64, cy as i64, radius.max(0) as i64);
        let x_range = (cx - r).max(0)..=(cx + r).min(self.width as i64 - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(self.height as i64 - 1);
        for y in y_range {
            for x in x_range.clone() {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(x as i32, y as i32, color);
                }
            }
        }
    }

    /// Bresenham line, clipped to the raster, stamped with a disc of `brush` radius.
    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), brush: i32, color: Color) {
        let Some(((mut x0, mut y0), (x1, y1))) =
            clip_line(from, to, self.width as i32, self.height as i32)
        else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.fill_circle(x0, y0, brush, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Farthest a pixel coordinate may lie off the raster.
const PIXEL_LIMIT: f32 = (1 << 20) as f32;

/// Round to a pixel coordinate within `PIXEL_LIMIT`; NaN maps to 0.
fn to_pixel(v: f32) -> i32 {
    v.round().clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as i32
}

impl Surface for RgbSurface {
    fn draw_point(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.fill_circle(to_pixel(x), to_pixel(y), to_pixel(radius).max(0), color);
    }

    fn draw_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        let brush = ((to_pixel(width) - 1) / 2).max(0);
        self.stroke_line(
            (to_pixel(x1), to_pixel(y1)),
            (to_pixel(x2), to_pixel(y2)),
            brush,
            color,
        );
    }

    fn clear(&mut self) {
        let Color { r, g, b } = self.background;
        for px in self.buf.chunks_exact_mut(3) {
            px.copy_from_slice(&[r, g, b]);
        }
    }
}

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip a segment to `[0, width) x [0, height)`; `None` if nothing is visible.
fn clip_line(
    (mut x0, mut y0): (i32, i32),
    (mut x1, mut y1): (i32, i32),
    width: i32,
    height: i32,
) -> Option<((i32, i32), (i32, i32))> {
    if width <= 0 || height <= 0 {
        return None;
    }
    loop {
        let code0 = outcode(x0, y0, width, height);
        let code1 = outcode(x1, y1, width, height);

        if (code0 | code1) == 0 {
            return Some(((x0, y0), (x1, y1)));
        }
        if (code0 & code1) != 0 {
            return None;
        }

        let code = if code0 != 0 { code0 } else { code1 };
        // i128 holds dx * dy for any pair of i32 endpoints
        let (x0w, y0w, x1w, y1w) = (x0 as i128, y0 as i128, x1 as i128, y1 as i128);
        let (w, h) = (width as i128, height as i128);
        let (dx, dy) = (x1w - x0w, y1w - y0w);
        let (x, y) = if code & TOP != 0 {
            ((x0w + dx * -y0w / dy) as i32, 0)
        } else if code & BOTTOM != 0 {
            ((x0w + dx * (h - 1 - y0w) / dy) as i32, height - 1)
        } else if code & LEFT != 0 {
            (0, (y0w + dy * -x0w / dx) as i32)
        } else {
            (width - 1, (y0w + dy * (w - 1 - x0w) / dx) as i32)
        };

        if code == code0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_line_inside_is_unchanged() {
        assert_eq!(clip_line((1, 2), (8, 2), 10, 10), Some(((1, 2), (8, 2))));
    }

    #[test]
    fn test_clip_line_crossing_bounds() {
        assert_eq!(clip_line((-5, 5), (15, 5), 10, 10), Some(((0, 5), (9, 5))));
    }

    #[test]
    fn test_clip_line_extreme_endpoints() {
        assert_eq!(
            clip_line((-10, 5), (i32::MAX, 5), 64, 48),
            Some(((0, 5), (63, 5)))
        );
        assert!(clip_line((i32::MIN, i32::MIN), (i32::MAX, i32::MAX), 64, 48).is_some());
        assert_eq!(clip_line((i32::MIN, -1), (i32::MAX, -1), 64, 48), None);
    }

    #[test]
    fn test_to_pixel_bounded() {
        assert_eq!(to_pixel(f32::INFINITY), 1 << 20);
        assert_eq!(to_pixel(f32::NEG_INFINITY), -(1 << 20));
        assert_eq!(to_pixel(f32::NAN), 0);
        assert_eq!(to_pixel(3.0e9), 1 << 20);
        assert_eq!(to_pixel(2.4), 2);
    }

    #[test]
    fn test_clip_line_fully_outside() {
        assert_eq!(clip_line((-5, -1), (-1, -5), 10, 10), None);
        assert_eq!(clip_line((0, 0), (5, 5), 0, 10), None);
    }
}
