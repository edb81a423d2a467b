use std::fmt::{Display, Formatter};

/// One sRGB color, 8 bits per channel.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl Color {
	/// Converts a normalized-float triple (the representation paint hosts keep
	/// internally) into byte channels. Values outside [0, 1] are clamped.
	pub fn from_normalized(v: [f32; 3]) -> Self {
		Self {
			r: (v[0].clamp(0.0, 1.0) * 255.0).round() as u8,
			g: (v[1].clamp(0.0, 1.0) * 255.0).round() as u8,
			b: (v[2].clamp(0.0, 1.0) * 255.0).round() as u8,
		}
	}

	pub fn to_normalized(self) -> [f32; 3] {
		[
			self.r as f32 / 255.0,
			self.g as f32 / 255.0,
			self.b as f32 / 255.0,
		]
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// A named, ordered list of colors. Order matters (it is the swatch order);
/// names are free-form and not guaranteed unique.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub name: String,
	pub colors: Vec<Color>,
}

impl Palette {
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			colors: Vec::new(),
		}
	}

	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

#[derive(Debug)]
pub enum PaletteError {
	NotAGimpPalette,
	InvalidTextLine { line: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::NotAGimpPalette => write!(f, "Not a GIMP palette file"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
