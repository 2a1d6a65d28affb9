//! Embeds binary assets into a generated C/C++ header.
//!
//! Each asset becomes a `const unsigned char` array holding the file's bytes in order,
//! followed by a `const int` constant with its length:
//! ```
//! let asset = asset_embed::Asset::new("TEST", vec![0x01u8, 0xAB, 0xFF]);
//! assert_eq!(asset.to_string(), "\
//! const unsigned char TEST[3] = {
//! 0x01, 0xab, 0xff
//! };
//! const int TEST_SIZE = 3;
//!
//! ");
//! ```
//!
//! # Usage
//! [`generate`] runs the whole pipeline for the bundled font assets:
//! ```no_run
//! # fn test() -> Result<(), asset_embed::Error> {
//! let header = asset_embed::generate(".")?;
//! println!("Generated {}!", header.display());
//! # Ok(())
//! # }
//! ```
//!
//! For other asset sets, combine [`build_document`] and [`write_document`]:
//! ```no_run
//! # fn test() -> Result<(), asset_embed::Error> {
//! let header = asset_embed::build_document([("logo.png", "LOGO"), ("click.wav", "CLICK_SOUND")])?;
//! asset_embed::write_document(&header, "Sprites.h")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]

mod embed;
mod error;

pub use embed::{
    build_document, generate, render_asset, write_document, Asset, BUNDLED_ASSETS, INCLUDE_GUARD, OUTPUT_FILE_NAME,
};
pub use error::Error;
