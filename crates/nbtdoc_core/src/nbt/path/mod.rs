use std::fmt::{self, Write as _};
use std::iter::{self, Peekable};
use std::str::Chars;

use crate::nbt::{Compound, NbtError, Result, Value};

/// One parsed operation in a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named compound entry.
	Key(String),
	/// Select a list element by zero-based index.
	Index(usize),
}

/// Parsed path expression such as `Palette.stone[2].Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NbtPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl NbtPath {
	/// Parse dotted keys with optional `[index]` selectors.
	///
	/// Bare keys use `[A-Za-z0-9_:+-]`. Any other key is written in double
	/// quotes, where `\` escapes the next character: `"my key".items[0]`.
	pub fn parse(input: &str) -> Result<Self> {
		let mut rest = input.chars().peekable();
		let mut steps = Vec::new();

		loop {
			let key = if rest.next_if_eq(&'"').is_some() {
				read_quoted(&mut rest).ok_or_else(|| invalid(input))?
			} else {
				let key: String = iter::from_fn(|| rest.next_if(|ch| is_bare_key_char(*ch))).collect();
				if key.is_empty() {
					return Err(invalid(input));
				}
				key
			};
			steps.push(PathStep::Key(key));

			while rest.next_if_eq(&'[').is_some() {
				let digits: String = iter::from_fn(|| rest.next_if(char::is_ascii_digit)).collect();
				if digits.is_empty() || rest.next_if_eq(&']').is_none() {
					return Err(invalid(input));
				}
				let index = digits.parse::<usize>().map_err(|_| invalid(input))?;
				steps.push(PathStep::Index(index));
			}

			match rest.next() {
				None => return Ok(Self { steps }),
				Some('.') if rest.peek().is_some() => {}
				Some(_) => return Err(invalid(input)),
			}
		}
	}
}

impl fmt::Display for NbtPath {
	/// Inverse of [`NbtPath::parse`]; keys are quoted only when needed.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Key(key) => {
					if idx > 0 {
						f.write_char('.')?;
					}
					if !key.is_empty() && key.chars().all(is_bare_key_char) {
						f.write_str(key)?;
					} else {
						write_quoted(f, key)?;
					}
				}
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

fn read_quoted(rest: &mut Peekable<Chars<'_>>) -> Option<String> {
	let mut key = String::new();
	loop {
		match rest.next()? {
			'"' => return Some(key),
			'\\' => key.push(rest.next()?),
			ch => key.push(ch),
		}
	}
}

fn write_quoted(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
	f.write_char('"')?;
	for ch in key.chars() {
		if matches!(ch, '"' | '\\') {
			f.write_char('\\')?;
		}
		f.write_char(ch)?;
	}
	f.write_char('"')
}

fn is_bare_key_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | ':' | '+')
}

fn invalid(input: &str) -> NbtError {
	NbtError::InvalidPath { path: input.to_owned() }
}

impl Value {
	/// Follow `path` from this value.
	pub fn at_path(&self, path: &NbtPath) -> Result<&Value> {
		let mut current = self;
		for step in &path.steps {
			current = match step {
				PathStep::Key(key) => current.get(key)?,
				PathStep::Index(index) => current.index(*index)?,
			};
		}
		Ok(current)
	}
}

impl Compound {
	/// Follow `path` from this compound; the first step must be a key.
	pub fn at_path(&self, path: &NbtPath) -> Result<&Value> {
		let Some((PathStep::Key(first), rest)) = path.steps.split_first() else {
			return Err(NbtError::InvalidPath { path: path.to_string() });
		};

		let mut current = self.try_get(first)?;
		for step in rest {
			current = match step {
				PathStep::Key(key) => current.get(key)?,
				PathStep::Index(index) => current.index(*index)?,
			};
		}
		Ok(current)
	}
}
