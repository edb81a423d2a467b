use std::fs;
use std::path::PathBuf;

use brush_palette::host::{Host, MemoryHost, ReportLevel};
use brush_palette::ops;
use brush_palette::palettes::palette::{Color, Palette, PaletteError};

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/palettes").join(name)
}

#[test]
fn gpl_parsing() {
	let pal = Palette::from_gpl_file(fixture("palette.gpl")).unwrap();

	// palettes loaded from disk are named after the file stem
	assert_eq!(pal.name, "palette");
	assert_eq!(pal.len(), 8);
	assert_eq!(pal.colors[0].to_string(), "#ff4500");
	assert_eq!(pal.colors[7].to_string(), "#2f4f4f");
}

#[test]
fn gpl_parsing_from_string() {
	let contents = fs::read_to_string(fixture("palette.gpl")).unwrap();
	let pal = Palette::from_gpl_string("Warm To Cool", contents).unwrap();

	assert_eq!(pal.name, "Warm To Cool");
	assert_eq!(pal.len(), 8);
	assert_eq!(pal.colors[0], Color::from([255, 69, 0]));
}

#[test]
fn gpl_magic_required() {
	let err = Palette::from_gpl_string("nope", "JASC-PAL\n0100\n1\n255 0 0\n").unwrap_err();
	assert!(matches!(err, PaletteError::NotAGimpPalette));
}

#[test]
fn gpl_magic_must_match_exactly() {
	// no whitespace tolerance beyond the line terminator
	let err = Palette::from_gpl_string("nope", "  GIMP Palette\n255 0 0 #ff0000\n").unwrap_err();
	assert!(matches!(err, PaletteError::NotAGimpPalette));
}

#[test]
fn gpl_magic_after_blank_lines() {
	let pal = Palette::from_gpl_string("blanks", "\n\nGIMP Palette\n1 2 3 #010203\n").unwrap();
	assert_eq!(pal.len(), 1);
}

#[test]
fn gpl_empty_input() {
	let err = Palette::from_gpl_string("empty", "").unwrap_err();
	assert!(matches!(err, PaletteError::NotAGimpPalette));
}

#[test]
fn gpl_skips_comments_and_short_lines() {
	let text = "GIMP Palette\n\
		#Palette Name: x\n\
		\n\
		Name: x\n\
		Columns: 0\n\
		10 20 30\n\
		10 20 30 #0a141e\n\
		40\t50\t60\tswatch name\n";

	let pal = Palette::from_gpl_string("x", text).unwrap();

	// the three-token line carries no fourth column and is skipped
	assert_eq!(pal.len(), 2);
	assert_eq!(pal.colors[0], Color { r: 10, g: 20, b: 30 });
	assert_eq!(pal.colors[1], Color { r: 40, g: 50, b: 60 });
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 4, msg: \"Invalid red value: \\\"red\\\"\" }")]
fn gpl_parsing_broken() {
	Palette::from_gpl_file(fixture("palette_broken.gpl")).unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 2, msg: \"Invalid blue value: \\\"256\\\"\" }")]
fn gpl_parsing_channel_out_of_range() {
	Palette::from_gpl_string("overflow", "GIMP Palette\n0 0 256 #000100\n").unwrap();
}

#[test]
fn gpl_encode_golden() {
	let mut pal = Palette::new("Test");
	pal.push_color(Color { r: 255, g: 0, b: 0 });

	assert_eq!(
		pal.to_gpl_string(),
		"GIMP Palette\n#Palette Name: Test\n#Description: Exported from Blender\n#Colors: 1\n255\t0\t0\t#ff0000\n"
	);
}

#[test]
fn gpl_encode_for_other_tool() {
	let pal = Palette::new("Test");
	let encoded = pal.to_gpl_string_for_tool("Krita");
	assert!(encoded.contains("#Description: Exported from Krita\n"));
}

#[test]
fn gpl_round_trip() {
	let mut pal = Palette::new("Roundtrip");
	for i in 0..2048u32 {
		pal.push_color(Color {
			r: (i % 256) as u8,
			g: (i / 8 % 256) as u8,
			b: (i * 7 % 256) as u8,
		});
	}

	let decoded = Palette::from_gpl_string("Roundtrip", pal.to_gpl_string()).unwrap();
	assert_eq!(decoded, pal);
}

#[test]
fn gpl_empty_palette_round_trip() {
	let pal = Palette::new("Empty");
	let decoded = Palette::from_gpl_string("Empty", pal.to_gpl_string()).unwrap();
	assert!(decoded.is_empty());
}

#[test]
fn normalized_conversion_is_exact_on_byte_grid() {
	for v in 0..=255u8 {
		let c = Color { r: v, g: v, b: v };
		assert_eq!(Color::from_normalized(c.to_normalized()), c);
	}
}

#[test]
fn gpl_write_and_reload() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("out.gpl");

	let mut pal = Palette::new("out");
	pal.push_color(Color { r: 1, g: 2, b: 3 });
	pal.push_color(Color { r: 254, g: 253, b: 252 });
	pal.write_gpl_file(&path).unwrap();

	let reloaded = Palette::from_gpl_file(&path).unwrap();
	assert_eq!(reloaded.name, "out");
	assert_eq!(reloaded.colors, pal.colors);
}

#[test]
fn import_export_through_host() {
	let mut host = MemoryHost::new();

	let id = ops::import_gpl_file(&mut host, fixture("palette.gpl")).unwrap();
	assert_eq!(host.palette_name(id), "palette");
	assert_eq!(host.colors(id).len(), 8);
	assert_eq!(
		host.messages.last().unwrap(),
		&(ReportLevel::Info, "Imported palette palette (8 colors)".to_string())
	);

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("exported.gpl");
	ops::export_gpl_file(&mut host, id, &path).unwrap();

	let reloaded = Palette::from_gpl_file(&path).unwrap();
	assert_eq!(reloaded.len(), 8);
	assert_eq!(reloaded.colors[0].to_string(), "#ff4500");
}

#[test]
fn importing_same_file_twice_does_not_duplicate() {
	let mut host = MemoryHost::new();

	let id1 = ops::import_gpl_file(&mut host, fixture("palette.gpl")).unwrap();
	let id2 = ops::import_gpl_file(&mut host, fixture("palette.gpl")).unwrap();

	assert_eq!(id1, id2);
	assert_eq!(host.palette_count(), 1);
	assert_eq!(host.colors(id2).len(), 8);
}
