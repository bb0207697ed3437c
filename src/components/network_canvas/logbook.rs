//! Timestamped, append-only action log.
//!
//! This is the user-facing record of everything that happened: node/edge
//! mutations, mode changes, algorithm steps, warnings, and outcomes. Ordering
//! is append order; entries are never rewritten. Diagnostic logging for
//! developers goes through the `log` facade instead.

/// Append-only log of timestamped lines.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
	entries: Vec<String>,
}

impl ActionLog {
	/// Create an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a line, stamped with the current wall-clock time.
	pub fn push(&mut self, text: impl AsRef<str>) {
		self.entries.push(format!("[{}] {}", now(), text.as_ref()));
	}

	/// All entries, oldest first.
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	/// Number of entries so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing has been logged yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Locale time string from the browser clock.
#[cfg(target_arch = "wasm32")]
fn now() -> String {
	js_sys::Date::new_0()
		.to_locale_time_string("en-US")
		.as_string()
		.unwrap_or_default()
}

/// Host fallback so the core stays testable off-wasm: UTC HH:MM:SS.
#[cfg(not(target_arch = "wasm32"))]
fn now() -> String {
	let secs = std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.as_secs())
		.unwrap_or(0);
	let day = secs % 86_400;
	format!("{:02}:{:02}:{:02}", day / 3600, (day % 3600) / 60, day % 60)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entries_are_stamped_and_ordered() {
		let mut log = ActionLog::new();
		log.push("first");
		log.push("second");
		assert_eq!(log.len(), 2);
		assert!(log.entries()[0].starts_with('['));
		assert!(log.entries()[0].ends_with("first"));
		assert!(log.entries()[1].ends_with("second"));
	}
}
