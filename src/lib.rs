pub mod app;
mod error;
pub mod factor;
pub mod nt_funcs;
mod primality;
mod traits;
pub mod validate;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod logger;

pub use app::{MenuOption, Session};
pub use error::{AppError, InputError, Result};
pub use factor::divisors;
pub use nt_funcs::{is_prime64, nprimes, primes, PrimeIter};
pub use primality::is_prime;
pub use traits::{PrimalityBase, PrimalityRefBase};
pub use validate::{is_valid_input, parse_number};

#[cfg(feature = "cli")]
pub use config::CliConfig;
