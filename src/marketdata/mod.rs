mod currency;

pub use currency::*;
