use thiserror::Error;

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex code length: expected 6 or 8 digits, got {0}")]
    Length(usize),

    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// Straight-alpha RGBA color, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from `0`–`255` channel bytes.
    #[inline]
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    ///
    /// Six-digit codes are fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::Length(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::Digit(hex.to_string()))?;

        let [r, g, b, a] = if digits.len() == 8 {
            value.to_be_bytes()
        } else {
            let [_, r, g, b] = value.to_be_bytes();
            [r, g, b, 0xFF]
        };

        Ok(Self::from_bytes(r, g, b, a))
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when the alpha byte is below 255.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba();
        if a < u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}")
        }
    }

    /// Channel bytes, rounded to nearest.
    pub fn to_rgba(self) -> [u8; 4] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Copy with alpha replaced; `alpha` is clamped to `[0, 1]`.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha.clamp(0.0, 1.0), ..self }
    }

    /// Clamps every channel to `[0, 1]` in place.
    pub fn normalize(&mut self) {
        self.r = self.r.clamp(0.0, 1.0);
        self.g = self.g.clamp(0.0, 1.0);
        self.b = self.b.clamp(0.0, 1.0);
        self.a = self.a.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}
