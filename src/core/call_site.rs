//! Call-site capture
//!
//! Emission methods are `#[track_caller]`, so the location seen here is the
//! first caller outside the chain of annotated wrappers. A wrapper that
//! forwards to the logger keeps attribution pointing at its own caller by
//! carrying `#[track_caller]` too.
//!
//! `Location` has no function name. [`CallSite::resolved`] recovers it by
//! walking the current stack and symbolizing the frame at that file and
//! line. Results are cached per call site.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;
use std::sync::OnceLock;

pub const UNKNOWN_FUNCTION: &str = "<unknown function>";
pub const UNKNOWN_FILE: &str = "<unknown file>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Placeholder used when the caller cannot be resolved.
    pub const fn unknown() -> Self {
        Self::new(UNKNOWN_FUNCTION, UNKNOWN_FILE, 0)
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    ///
    /// `Location` does not expose the enclosing function, so it is reported
    /// as [`UNKNOWN_FUNCTION`]; the logging macros fill it in.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(UNKNOWN_FUNCTION, location.file(), location.line())
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Base name of the source file, without directories.
    pub fn file(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    /// Source path as recorded by the compiler.
    pub fn path(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fill in an unknown function name from the current stack.
    ///
    /// Must run on the thread that made the call. Stays
    /// [`UNKNOWN_FUNCTION`] when no frame at this file and line can be
    /// symbolized (stripped binaries, for instance).
    pub fn resolved(self) -> Self {
        if self.function != UNKNOWN_FUNCTION || self.line == 0 || self.file == UNKNOWN_FILE {
            return self;
        }

        static RESOLVED: OnceLock<Mutex<HashMap<(&'static str, u32), Option<&'static str>>>> =
            OnceLock::new();
        let cache = RESOLVED.get_or_init(|| Mutex::new(HashMap::new()));

        if let Some(cached) = cache.lock().get(&(self.file, self.line)) {
            return Self {
                function: cached.unwrap_or(UNKNOWN_FUNCTION),
                ..self
            };
        }

        let found = symbolize(self.file, self.line);
        cache.lock().insert((self.file, self.line), found);
        Self {
            function: found.unwrap_or(UNKNOWN_FUNCTION),
            ..self
        }
    }
}

/// Name of the innermost frame whose debug info points at `file:line`.
fn symbolize(file: &str, line: u32) -> Option<&'static str> {
    let wanted = Path::new(file);
    let mut found: Option<String> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(line) {
                return;
            }
            let at_file = symbol
                .filename()
                .is_some_and(|path| path.ends_with(wanted));
            if let (true, Some(name)) = (at_file, symbol.name()) {
                found = Some(format!("{:#}", name));
            }
        });
        found.is_none()
    });

    // Leaked once per distinct call site, then served from the cache.
    found.map(|name| strip_closures(Box::leak(name.into_boxed_str())))
}

fn strip_closures(mut name: &str) -> &str {
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Strip the helper item and any closure frames from a `type_name` path.
#[doc(hidden)]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    strip_closures(type_name.strip_suffix("::__here").unwrap_or(type_name))
}

/// Path of the function the macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        $crate::core::call_site::enclosing_function(::std::any::type_name_of_val(&__here))
    }};
}

/// Capture the full call site (function, file, line) at the expansion point.
///
/// ```
/// let site = console_logger::call_site!();
/// assert!(site.function().ends_with("main") || site.function().contains("rust_out"));
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::__function_name!(), file!(), line!())
    };
}
