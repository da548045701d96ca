//! Utility functions shared by the classifier and rule implementations.

pub mod allowance;
pub mod class_names;

#[doc(inline)]
pub use allowance::{check_allow_with_reason, AllowCheck};
#[doc(inline)]
pub use class_names::{
    is_exempt_value, parse_scale_number, split_value, strip_any_modifiers, strip_known_modifiers,
};
