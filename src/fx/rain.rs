use rand::Rng;

/// Digits plus the katakana set the falling columns draw from.
pub const RAIN_GLYPHS: &str =
    "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";
/// Default glyph cell edge in pixels.
pub const RAIN_CELL_PX: u32 = 14;

const SPARKLE_CHANCE: f64 = 0.02;
const RESET_CHANCE: f64 = 0.025;
const SPARKLE_ALPHA: f64 = 1.0;
const BASE_ALPHA: f64 = 0.5;

/// A 2D surface the rain is painted onto.
pub trait Surface {
    /// Cover the whole surface with the translucent trailing-fade layer.
    fn fade(&mut self, width: f64, height: f64);
    /// Draw one glyph with its baseline at `(x, y)`.
    fn glyph(&mut self, glyph: char, x: f64, y: f64, alpha: f64);
}

/// Drop-head state for the falling glyph columns.
#[derive(Debug, Clone)]
pub struct RainField {
    cell: u32,
    width: u32,
    height: u32,
    drops: Vec<u32>,
    frames: u64,
    glyphs: Vec<char>,
}

pub fn column_count(width: u32, cell: u32) -> usize {
    if cell == 0 {
        0
    } else {
        (width / cell) as usize
    }
}

impl RainField {
    pub fn new(width: u32, height: u32, cell: u32) -> Self {
        Self {
            cell,
            width,
            height,
            drops: vec![1; column_count(width, cell)],
            frames: 0,
            glyphs: RAIN_GLYPHS.chars().collect(),
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Match a new viewport. Columns that still exist keep their heads, new
    /// ones start at the top.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.drops.resize(column_count(width, self.cell), 1);
    }

    /// Called once per scheduled animation frame. Only every other frame is
    /// painted; returns whether this one was.
    pub fn frame<S, R>(&mut self, surface: &mut S, rng: &mut R) -> bool
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        self.frames += 1;
        if self.frames % 2 != 0 {
            return false;
        }
        self.paint(surface, rng);
        true
    }

    fn paint<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.fade(self.width as f64, self.height as f64);
        if self.glyphs.is_empty() {
            return;
        }
        let cell = self.cell as f64;
        for (i, head) in self.drops.iter_mut().enumerate() {
            let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let x = i as f64 * cell;
            let y = *head as f64 * cell;
            let alpha = if rng.gen_bool(SPARKLE_CHANCE) {
                SPARKLE_ALPHA
            } else {
                BASE_ALPHA
            };
            surface.glyph(glyph, x, y, alpha);

            if y > self.height as f64 && rng.gen_bool(RESET_CHANCE) {
                *head = 0;
            }
            *head += 1;
        }
    }
}
