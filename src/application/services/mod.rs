//! Application services
//!
//! Each service handles a specific domain of functionality.

pub mod calculator;
pub mod navigation;
pub mod session;

pub use calculator::{
    Calculation, CalculatorService, PolyOperation, RingOperation, SUPPORTED_PRIMES,
};
pub use navigation::NavigationService;
pub use session::{RingSession, SessionEnd};
