use std::collections::HashMap;

/// Paint-tool contexts that carry their own active-palette binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintContext {
	ImagePaint,
	GpencilPaint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportLevel {
	Info,
	Warning,
	Error,
}

/// Opaque handle to one palette inside the host's store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaletteId(pub usize);

/// What the surrounding application has to provide: a store of named
/// palettes holding normalized-float colors, per-tool active-palette
/// bindings, and a channel for user-facing messages.
///
/// The store is expected to be externally synchronized; nothing here runs
/// concurrently.
pub trait Host {
	/// Returns the palette with the given name, creating an empty one if no
	/// palette of that name exists yet.
	fn create_or_find(&mut self, name: &str) -> PaletteId;

	/// Drops all colors from the palette, keeping its identity.
	fn clear(&mut self, id: PaletteId);

	/// Appends one color, channels normalized to [0, 1].
	fn push_color(&mut self, id: PaletteId, rgb: [f32; 3]);

	/// The palette's colors in swatch order.
	fn colors(&self, id: PaletteId) -> Vec<[f32; 3]>;

	fn palette_name(&self, id: PaletteId) -> String;

	fn set_active(&mut self, context: PaintContext, id: PaletteId);

	fn active(&self, context: PaintContext) -> Option<PaletteId>;

	/// Surfaces one short message to the user.
	fn report(&mut self, level: ReportLevel, message: &str);
}

/// In-memory [Host]: the reference implementation, also used as the test
/// double. Messages are recorded instead of displayed.
#[derive(Default)]
pub struct MemoryHost {
	palettes: Vec<(String, Vec<[f32; 3]>)>,
	active: HashMap<PaintContext, PaletteId>,
	pub messages: Vec<(ReportLevel, String)>,
}

impl MemoryHost {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn palette_count(&self) -> usize {
		self.palettes.len()
	}
}

impl Host for MemoryHost {
	fn create_or_find(&mut self, name: &str) -> PaletteId {
		if let Some(i) = self.palettes.iter().position(|(n, _)| n == name) {
			return PaletteId(i);
		}

		self.palettes.push((name.to_string(), Vec::new()));
		PaletteId(self.palettes.len() - 1)
	}

	fn clear(&mut self, id: PaletteId) {
		self.palettes[id.0].1.clear();
	}

	fn push_color(&mut self, id: PaletteId, rgb: [f32; 3]) {
		self.palettes[id.0].1.push(rgb);
	}

	fn colors(&self, id: PaletteId) -> Vec<[f32; 3]> {
		self.palettes[id.0].1.clone()
	}

	fn palette_name(&self, id: PaletteId) -> String {
		self.palettes[id.0].0.clone()
	}

	fn set_active(&mut self, context: PaintContext, id: PaletteId) {
		self.active.insert(context, id);
	}

	fn active(&self, context: PaintContext) -> Option<PaletteId> {
		self.active.get(&context).copied()
	}

	fn report(&mut self, level: ReportLevel, message: &str) {
		self.messages.push((level, message.to_string()));
	}
}
