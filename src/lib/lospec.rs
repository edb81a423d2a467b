use std::fmt::{Display, Formatter};
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use ureq::Agent;
use ureq::ResponseExt;

use crate::palettes::palette::{Color, Palette};

/// Published palette pages all live under this prefix.
pub const PALETTE_URL_PREFIX: &str = "https://lospec.com/palette-list/";

/// Discovery endpoint; redirects to a concrete palette page.
pub const RANDOM_PALETTE_URL: &str = "https://lospec.com/palette-list/random";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("brush-palette/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum FetchError {
	InvalidUrl(String),
	Network(String),
	NotFound,
	InvalidJson(String),
}

impl Display for FetchError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			FetchError::InvalidUrl(url) => write!(f, "URL doesn't look like a lospec palette: {url}"),
			FetchError::Network(msg) => write!(f, "Network error: {msg}"),
			FetchError::NotFound => write!(f, "Palette could not be found"),
			FetchError::InvalidJson(msg) => write!(f, "Invalid palette data: {msg}"),
		}
	}
}

impl std::error::Error for FetchError {}

/// What the fetcher needs to see of an HTTP response.
pub struct Response {
	/// URL the request ended up at after redirects.
	pub final_url: String,
	pub content_type: Option<String>,
	pub body: Vec<u8>,
}

/// Blocking HTTP seam. Production code uses [HttpTransport]; tests substitute
/// a scripted mock.
pub trait Transport {
	fn get(&self, url: &str) -> Result<Response, FetchError>;
}

/// Transport backed by ureq: follows redirects, enforces a global timeout.
pub struct HttpTransport {
	agent: Agent,
}

impl HttpTransport {
	pub fn new() -> Self {
		let agent: Agent = Agent::config_builder()
			.timeout_global(Some(FETCH_TIMEOUT))
			.build()
			.into();
		Self { agent }
	}
}

impl Default for HttpTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl Transport for HttpTransport {
	fn get(&self, url: &str) -> Result<Response, FetchError> {
		use std::io::Read;

		let response = self.agent.get(url)
			.header("User-Agent", USER_AGENT)
			.call()
			.map_err(|e| FetchError::Network(e.to_string()))?;

		let final_url = response.get_uri().to_string();
		let content_type = response.headers()
			.get("Content-Type")
			.and_then(|v| v.to_str().ok())
			.map(|v| v.to_string());

		let mut body = Vec::new();
		response.into_body()
			.into_reader()
			.read_to_end(&mut body)
			.map_err(|e| FetchError::Network(e.to_string()))?;

		Ok(Response { final_url, content_type, body })
	}
}

/// Palette definition as served by the lospec JSON API. Extra fields
/// (author, tags, …) are ignored.
#[derive(Debug, Deserialize)]
struct LospecPalette {
	name: String,
	colors: Vec<String>,
}

/// A palette decoded from lospec, plus any color values that had to be
/// dropped because they were not parseable.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedPalette {
	pub palette: Palette,
	pub skipped: Vec<String>,
}

impl FetchedPalette {
	/// One aggregated warning naming every dropped color value, or None if the
	/// palette decoded cleanly.
	pub fn warning(&self) -> Option<String> {
		if self.skipped.is_empty() {
			return None;
		}

		let tokens = self.skipped.iter()
			.map(|t| format!("\"{t}\""))
			.collect::<Vec<String>>()
			.join(", ");
		Some(format!("Skipped {} invalid color value(s): {}", self.skipped.len(), tokens))
	}
}

/// Asks lospec for a random palette and returns the palette page URL the
/// discovery endpoint redirected to.
pub fn resolve_random<T: Transport>(transport: &T) -> Result<String, FetchError> {
	let response = transport.get(RANDOM_PALETTE_URL)?;
	Ok(response.final_url)
}

// Lospec answers requests for unknown slugs with 200 and an HTML error page
// instead of a 404. The Content-Type header is the reliable signal; the body
// sniff only kicks in when no header came back at all.
fn looks_like_html(response: &Response) -> bool {
	if let Some(ct) = &response.content_type {
		return ct.to_ascii_lowercase().contains("text/html");
	}

	let head_len = response.body.len().min(64);
	let head = String::from_utf8_lossy(&response.body[..head_len]).to_lowercase();
	let head = head.trim_start();
	head.starts_with("<!doctype") || head.starts_with("<html")
}

/// Fetches the palette published at `url` (a lospec palette page URL).
///
/// Color values that fail to parse are skipped rather than failing the whole
/// fetch; they are collected on the returned [FetchedPalette].
pub fn fetch<T: Transport>(transport: &T, url: &str) -> Result<FetchedPalette, FetchError> {
	if !url.starts_with(PALETTE_URL_PREFIX) {
		return Err(FetchError::InvalidUrl(url.to_string()));
	}

	let json_url = format!("{}.json", url.trim_end_matches('/'));
	let response = transport.get(&json_url)?;

	if looks_like_html(&response) {
		return Err(FetchError::NotFound);
	}

	let decoded: LospecPalette = serde_json::from_slice(&response.body)
		.map_err(|e| FetchError::InvalidJson(e.to_string()))?;

	let re = Regex::new(r"^(?P<r>[0-9a-fA-F]{2})(?P<g>[0-9a-fA-F]{2})(?P<b>[0-9a-fA-F]{2})$").unwrap();

	let mut pal = Palette::new(&decoded.name);
	let mut skipped: Vec<String> = Vec::new();
	for value in &decoded.colors {
		let Some(groups) = re.captures(value.trim()) else {
			skipped.push(value.clone());
			continue;
		};

		let (Ok(r), Ok(g), Ok(b)) = (
			u8::from_str_radix(&groups["r"], 16),
			u8::from_str_radix(&groups["g"], 16),
			u8::from_str_radix(&groups["b"], 16),
		) else {
			skipped.push(value.clone());
			continue;
		};

		pal.push_color(Color { r, g, b });
	}

	if !skipped.is_empty() {
		log::warn!(
			"palette \"{}\": skipped {} unparsable color value(s): {}",
			decoded.name,
			skipped.len(),
			skipped.join(", ")
		);
	}

	Ok(FetchedPalette { palette: pal, skipped })
}
