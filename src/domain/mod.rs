//! Domain layer: algebra and the documentation navigation model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod coefficient;
pub mod error;
pub mod factor_ring;
pub mod irreducible;
pub mod modint;
pub mod navtree;
pub mod polynomial;

pub use coefficient::{Coefficient, Field, FiniteField};
pub use error::{DomainError, DomainResult};
pub use factor_ring::FactorRingElement;
pub use irreducible::{candidate_count, is_irreducible};
pub use modint::ModInt;
pub use navtree::{NavChildren, NavNode, NavTree, SYNC_OFF_MSG, SYNC_ON_MSG};
pub use polynomial::Polynomial;
