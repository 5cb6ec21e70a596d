// SPDX-License-Identifier: MPL-2.0
pub mod transform;

pub use transform::{transform, Transform};
