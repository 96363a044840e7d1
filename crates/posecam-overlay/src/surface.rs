#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0x00RRGGBB`.
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// A 2D drawing target.
///
/// Marks persist until `clear` is called.
pub trait Surface: Send {
    fn draw_point(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn draw_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color);
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Segment {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    },
    Clear,
}

/// Keeps every command it receives, in order. Handy headless and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> Vec<(f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Point { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn segments(&self) -> Vec<((f32, f32), (f32, f32))> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Segment { x1, y1, x2, y2, .. } => Some(((*x1, *y1), (*x2, *y2))),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_point(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Point {
            x,
            y,
            radius,
            color,
        });
    }

    fn draw_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::Segment {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}
