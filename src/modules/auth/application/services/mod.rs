pub mod jwt;
pub mod lockout;

pub use lockout::LockoutPolicy;
