//! Central constants for greeter
//!
//! All greeting literals live here so the library, the CLI and the tests
//! agree on the exact text.

/// Text placed before the name in a greeting
pub const GREETING_PREFIX: &str = "Hello, ";

/// Text placed before the name in a farewell
pub const FAREWELL_PREFIX: &str = "Goodbye, ";

/// Text placed after the name in both greetings and farewells
pub const GREETING_SUFFIX: &str = "!";

/// Name used by the default greeting and by `hello_or_default` for empty input
pub const DEFAULT_NAME: &str = "World";

/// Name greeted by the second line of the demo transcript
pub const DEMO_NAME: &str = "Developer";

/// Environment variable holding a `tracing` filter directive (e.g. `greeter=debug`)
pub const LOG_ENV_VAR: &str = "GREETER_LOG";

/// Filter used when neither `GREETER_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
