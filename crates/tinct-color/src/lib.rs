// SPDX-License-Identifier: MIT
//
// tinct-color — color values and conversions for the tinct theme engine.
//
// Everything here is pure and allocation-light: hex strings in, small
// `Copy` value types out. Luminance and contrast live one layer up in
// tinct-theme; this crate only knows how to move between notations.

pub mod color;

pub use color::{
    Hsl, ParseHslError, Rgb, darken, hex_to_hsl, hex_to_rgb, hsl_to_hex, is_hex_color, lighten,
    normalize_hex, parse_hex, rgb_to_hex, srgb_to_linear,
};
