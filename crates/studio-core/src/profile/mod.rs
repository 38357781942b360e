//! Profile data: MFA factors.

pub mod errors;
pub mod keys;
pub mod mfa;
pub mod types;

pub use errors::AuthError;
pub use mfa::{MfaBackend, MfaFactorsQuery, get_mfa_list_factors};
pub use types::{Factor, FactorList, FactorStatus, FactorType};
