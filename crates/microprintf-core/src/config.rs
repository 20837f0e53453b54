//! Formatting mode configuration.
//!
//! The mode decides what happens when a format string or an argument list
//! does not line up with the directive grammar:
//! - `permissive` (default): a malformed directive is emitted literally and
//!   scanning resumes after its `%`. Arguments are accepted through the
//!   integer promotions a C caller would rely on (an `int` for `%c`, an
//!   unsigned 32-bit value for `%u`, ...). Leftover arguments are ignored.
//! - `strict`: any malformed directive, any argument that is not exactly the
//!   type its conversion expects, and any leftover argument fails the call.
//!
//! The process default can be changed with [`set_format_mode`]. With the
//! `std` feature it is read once from the `MICROPRINTF_MODE` environment
//! variable.

use core::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted by [`format_mode`] when built with `std`.
pub const MODE_ENV_VAR: &str = "MICROPRINTF_MODE";

/// How the engine reacts to malformed input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Malformed directives are emitted literally; arguments are promoted
    /// where the conversion is lossless or matches C's variadic promotion.
    #[default]
    Permissive,
    /// Malformed directives, argument mismatches and leftover arguments are
    /// reported as errors.
    Strict,
}

impl FormatMode {
    /// Parse from string (case-insensitive). Unknown values map to the default.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        let s = s.trim();
        if ["strict", "pedantic", "reject"]
            .iter()
            .any(|name| s.eq_ignore_ascii_case(name))
        {
            Self::Strict
        } else {
            Self::Permissive
        }
    }

    /// Returns true if malformed input fails the call.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

// Atomic cache: 0=unresolved, 1=Permissive, 2=Strict, 255=resolving.
static CACHED_MODE: AtomicU8 = AtomicU8::new(MODE_UNRESOLVED);

const MODE_UNRESOLVED: u8 = 0;
const MODE_PERMISSIVE: u8 = 1;
const MODE_STRICT: u8 = 2;
#[cfg_attr(not(feature = "std"), allow(dead_code))]
const MODE_RESOLVING: u8 = 255;

fn mode_to_u8(mode: FormatMode) -> u8 {
    match mode {
        FormatMode::Permissive => MODE_PERMISSIVE,
        FormatMode::Strict => MODE_STRICT,
    }
}

fn u8_to_mode(v: u8) -> FormatMode {
    match v {
        MODE_STRICT => FormatMode::Strict,
        _ => FormatMode::Permissive,
    }
}

/// Process default mode.
///
/// The first call resolves the default (from `MICROPRINTF_MODE` with the
/// `std` feature) and caches it. A call that arrives while another context is
/// resolving gets [`FormatMode::default`] instead of blocking.
#[must_use]
pub fn format_mode() -> FormatMode {
    match CACHED_MODE.load(Ordering::Relaxed) {
        MODE_UNRESOLVED => resolve_mode(),
        cached => u8_to_mode(cached),
    }
}

/// Override the process default mode.
pub fn set_format_mode(mode: FormatMode) {
    CACHED_MODE.store(mode_to_u8(mode), Ordering::SeqCst);
}

#[cfg(feature = "std")]
fn resolve_mode() -> FormatMode {
    if CACHED_MODE
        .compare_exchange(
            MODE_UNRESOLVED,
            MODE_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        return u8_to_mode(CACHED_MODE.load(Ordering::Relaxed));
    }

    let mode = std::env::var(MODE_ENV_VAR)
        .map(|raw| FormatMode::from_str_loose(&raw))
        .unwrap_or_default();
    // A concurrent set_format_mode() wins over the environment.
    let _ = CACHED_MODE.compare_exchange(
        MODE_RESOLVING,
        mode_to_u8(mode),
        Ordering::SeqCst,
        Ordering::Relaxed,
    );
    u8_to_mode(CACHED_MODE.load(Ordering::Relaxed))
}

#[cfg(not(feature = "std"))]
fn resolve_mode() -> FormatMode {
    FormatMode::default()
}

/// Per-formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Handling of malformed directives and argument mismatches.
    pub mode: FormatMode,
}

impl Config {
    /// Configuration with an explicit mode.
    #[must_use]
    pub const fn new(mode: FormatMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(FormatMode::Strict)
    }

    #[must_use]
    pub const fn permissive() -> Self {
        Self::new(FormatMode::Permissive)
    }
}

impl Default for Config {
    /// Uses the process default from [`format_mode`].
    fn default() -> Self {
        Self::new(format_mode())
    }
}
