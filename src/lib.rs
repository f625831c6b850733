#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use cty_reflect as reflect;
pub use cty_utils as utils;
pub use cty_value as value;
