//! greeter - a tiny greeting library
//!
//! ```
//! assert_eq!(greeter::hello_name("Alice"), "Hello, Alice!");
//! ```

pub mod cli;
pub mod constants;
pub mod error;
pub mod greeter;
pub mod logging;

pub use error::{GreeterError, Result};
pub use greeter::{
    goodbye, hello, hello_name, hello_or_default, write_goodbye, write_hello, write_transcript,
};
