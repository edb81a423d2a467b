//! The import/export/fetch operations, expressed over an explicit [Host].
//!
//! Every operation either succeeds and reports one informational message
//! through the host, or returns a typed error for the host glue to surface.
//! No failure is fatal to the process.

use std::path::Path;

use crate::host::{Host, PaintContext, PaletteId, ReportLevel};
use crate::lospec::{self, FetchError, Transport};
use crate::palettes::palette::{Color, Palette, PaletteError};

/// Imports a .gpl file into the host's palette store. The palette takes its
/// name from the file stem; an existing palette of that name is refreshed in
/// place.
pub fn import_gpl_file<H: Host, P: AsRef<Path>>(host: &mut H, path: P) -> Result<PaletteId, PaletteError> {
	let pal = Palette::from_gpl_file(path)?;

	let id = host.create_or_find(&pal.name);
	host.clear(id);
	for c in &pal.colors {
		host.push_color(id, c.to_normalized());
	}

	host.report(ReportLevel::Info, &format!("Imported palette {} ({} colors)", pal.name, pal.len()));
	Ok(id)
}

/// Writes a host palette to `path` in GPL form.
pub fn export_gpl_file<H: Host, P: AsRef<Path>>(host: &mut H, id: PaletteId, path: P) -> Result<(), PaletteError> {
	let mut pal = Palette::new(host.palette_name(id));
	for rgb in host.colors(id) {
		pal.push_color(Color::from_normalized(rgb));
	}

	pal.write_gpl_file(path)?;

	host.report(ReportLevel::Info, &format!("Exported palette {} ({} colors)", pal.name, pal.len()));
	Ok(())
}

/// Fetches a published lospec palette into the host's store.
///
/// Upsert-by-name: fetching the same palette again refills the existing
/// entry instead of creating a duplicate. The palette is then bound as the
/// active one for both paint-tool contexts at once.
pub fn import_lospec<H: Host, T: Transport>(host: &mut H, transport: &T, url: &str) -> Result<PaletteId, FetchError> {
	let fetched = lospec::fetch(transport, url)?;
	let pal = &fetched.palette;

	let id = host.create_or_find(&pal.name);
	host.clear(id);
	for c in &pal.colors {
		host.push_color(id, c.to_normalized());
	}

	host.set_active(PaintContext::ImagePaint, id);
	host.set_active(PaintContext::GpencilPaint, id);

	if let Some(warning) = fetched.warning() {
		host.report(ReportLevel::Warning, &warning);
	}
	host.report(ReportLevel::Info, &format!("Imported palette {} ({} colors)", pal.name, pal.len()));
	Ok(id)
}

/// Asks lospec for a random palette and imports it.
pub fn import_random_lospec<H: Host, T: Transport>(host: &mut H, transport: &T) -> Result<PaletteId, FetchError> {
	let url = lospec::resolve_random(transport)?;
	import_lospec(host, transport, &url)
}
