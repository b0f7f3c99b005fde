use num_integer::{Integer, Roots};
use num_traits::{NumRef, RefNum};

/// Integer types accepted by the trial division routines. Any unsigned primitive
/// integer qualifies, and so does `num_bigint::BigUint`.
pub trait PrimalityBase: Integer + Roots + NumRef + Clone {}
impl<T: Integer + Roots + NumRef + Clone> PrimalityBase for T {}

/// Arithmetic required on references of a [PrimalityBase] type
pub trait PrimalityRefBase<Base>: RefNum<Base> {}
impl<T, Base> PrimalityRefBase<Base> for T where T: RefNum<Base> {}
