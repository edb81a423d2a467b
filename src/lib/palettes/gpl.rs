use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::palettes::palette::{Color, Palette, PaletteError};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/gpl_file.cpp

const GPL_MAGIC: &str = "GIMP Palette";

/// Tool name baked into the "#Description:" line of exported palettes.
pub const DEFAULT_EXPORT_TOOL: &str = "Blender";

impl Palette {
	fn from_gpl_internal<R: BufRead>(name: &str, reader: &mut R) -> Result<Palette, PaletteError> {
		let mut pal = Palette::new(name);
		let mut lines = reader.lines().enumerate();

		// the magic sequence must be the first line carrying any content at all
		loop {
			let Some((_, line)) = lines.next() else {
				return Err(PaletteError::NotAGimpPalette);
			};
			let line = line?;
			let line = line.strip_suffix('\r').unwrap_or(&line);
			if line.is_empty() {
				continue;
			}
			if line != GPL_MAGIC {
				return Err(PaletteError::NotAGimpPalette);
			}
			break;
		}

		for (i, line) in lines {
			let line = line?;
			if line.starts_with('#') {
				continue;
			}

			// tabs count as column separators, same as spaces
			let tokens = line.split_whitespace().collect::<Vec<&str>>();
			if tokens.len() < 4 {
				// tolerates blank lines, "Name:"/"Columns:" headers and other
				// lines too short to be a swatch
				continue;
			}

			let channel = |token: &str, channel_name: &str| {
				token.parse::<u8>().map_err(|_| PaletteError::InvalidTextLine {
					line: i + 1,
					msg: format!("Invalid {channel_name} value: \"{token}\""),
				})
			};

			// the fourth and following tokens (hex value, swatch name) carry
			// no extra information and are ignored
			pal.push_color(Color {
				r: channel(tokens[0], "red")?,
				g: channel(tokens[1], "green")?,
				b: channel(tokens[2], "blue")?,
			});
		}

		Ok(pal)
	}

	/// Reads a .gpl file. The palette is named after the file stem.
	pub fn from_gpl_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let path = path.as_ref();
		let name = path.file_stem()
			.and_then(|s| s.to_str())
			.unwrap_or("Untitled")
			.to_string();

		let f = File::open(path)?;
		let mut reader = BufReader::new(f);
		Self::from_gpl_internal(&name, &mut reader)
	}

	pub fn from_gpl_string<S: Into<String>>(name: &str, s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let mut reader = BufReader::new(s.as_bytes());
		Self::from_gpl_internal(name, &mut reader)
	}

	/// Renders the palette in GPL form, attributing the export to `tool`.
	pub fn to_gpl_string_for_tool(&self, tool: &str) -> String {
		let mut out = String::new();
		out.push_str(GPL_MAGIC);
		out.push('\n');
		out.push_str(&format!("#Palette Name: {}\n", self.name));
		out.push_str(&format!("#Description: Exported from {tool}\n"));
		out.push_str(&format!("#Colors: {}\n", self.len()));

		for c in &self.colors {
			out.push_str(&format!("{}\t{}\t{}\t{c}\n", c.r, c.g, c.b));
		}

		out
	}

	pub fn to_gpl_string(&self) -> String {
		self.to_gpl_string_for_tool(DEFAULT_EXPORT_TOOL)
	}

	/// Writes the whole palette to `path` in one go.
	pub fn write_gpl_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		let buf = self.to_gpl_string();
		let mut f = File::create(path)?;
		f.write_all(buf.as_bytes())?;
		Ok(())
	}
}
