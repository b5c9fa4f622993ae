use rand::{seq::SliceRandom, Rng};

const SPARKS: [char; 5] = ['*', '+', '·', '✦', '✧'];
const SPARK_COUNT: usize = 24;
const GRAVITY: f64 = 15.0;
/// Seconds advanced per tick
const STEP: f64 = 0.1;
/// Ticks the celebration stays on screen
const LIFETIME_TICKS: u32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
    /// letters of the solved word fly to a fixed slot and stay there
    pub target: Option<(f64, f64)>,
}

impl Particle {
    fn spark<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-4.0..-1.0),
            symbol: *SPARKS.choose(rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(1.5..3.0),
            target: None,
        }
    }

    fn letter(from: (f64, f64), to: (f64, f64), symbol: char, color_index: usize) -> Self {
        Self {
            x: from.0,
            y: from.1,
            vel_x: to.0 - from.0,
            vel_y: to.1 - from.1,
            symbol,
            color_index,
            age: 0.0,
            max_age: f64::INFINITY,
            target: Some(to),
        }
    }

    pub fn is_letter(&self) -> bool {
        self.target.is_some()
    }

    /// Returns false once the particle has burnt out
    fn update(&mut self, dt: f64) -> bool {
        match self.target {
            Some((tx, ty)) => {
                if ((tx - self.x).powi(2) + (ty - self.y).powi(2)).sqrt() > 1.0 {
                    self.x += self.vel_x * dt;
                    self.y += self.vel_y * dt;
                } else {
                    self.x = tx;
                    self.y = ty;
                    self.vel_x = 0.0;
                    self.vel_y = 0.0;
                }
            }
            None => {
                self.x += self.vel_x * dt;
                self.y += self.vel_y * dt;
                self.vel_y += GRAVITY * dt;
            }
        }
        self.age += dt;
        self.age < self.max_age
    }
}

/// Short burst over the board after a word is guessed: the word's letters
/// gather in the middle of the screen while sparks fall around them.
#[derive(Debug, Default)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    ticks_left: u32,
    width: f64,
    height: f64,
}

impl Celebration {
    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    pub fn start<R: Rng + ?Sized>(&mut self, word: &str, width: u16, height: u16, rng: &mut R) {
        self.particles.clear();
        self.ticks_left = LIFETIME_TICKS;
        self.width = width as f64;
        self.height = height as f64;

        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;

        let spacing = 2.0;
        let letters = word.chars().count() as f64;
        let left = center_x - (letters - 1.0).max(0.0) * spacing / 2.0;
        for (i, ch) in word.chars().enumerate() {
            let from = (
                center_x + rng.gen_range(-10.0..10.0),
                center_y + rng.gen_range(-5.0..5.0),
            );
            let to = (left + i as f64 * spacing, center_y - 2.0);
            self.particles
                .push(Particle::letter(from, to, ch, rng.gen_range(0..7)));
        }

        for _ in 0..SPARK_COUNT {
            let x = center_x + rng.gen_range(-15.0..15.0);
            let y = center_y + rng.gen_range(-8.0..8.0);
            self.particles.push(Particle::spark(x, y, rng));
        }
    }

    pub fn stop(&mut self) {
        self.ticks_left = 0;
        self.particles.clear();
    }

    /// Advances the animation by one tick
    pub fn update(&mut self) {
        if !self.is_active() {
            return;
        }
        self.ticks_left -= 1;
        if self.ticks_left == 0 {
            self.particles.clear();
            return;
        }

        let margin = 5.0;
        let (width, height) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            let alive = p.update(STEP);
            if p.is_letter() {
                return alive;
            }
            let off_screen = p.y > height + margin || p.x < -margin || p.x > width + margin;
            alive && !off_screen
        });
    }
}
