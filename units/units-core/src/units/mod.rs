//! Predefined units grouped by dimension.
//!
//! The units live in this crate so that the derive-generated `Display` impls for `Quantity<U>` do not run into
//! the orphan rules.
//!
//! - [`mass`]: kilogram (canonical) and gram.
//! - [`volume`]: cubic metre (canonical), litre, cubic centimetre, millilitre.
//! - [`density`]: `Mass / Volume` aliases built from the two modules above.

pub mod density;
pub mod mass;
pub mod volume;
