//! Request addresses for the avatars service.
//!
//! The service renders browser icons, credit card icons, favicons, country
//! flags, remote images, initials avatars and QR codes. This crate doesn't
//! fetch anything: it validates the arguments and builds the address that an
//! HTTP client or an `<img>` tag can use directly.
//!
//! ```
//! use avatars_client::{Client, Config};
//!
//! let client = Client::new(Config::new("https://x.io/v1", "p1")).unwrap();
//! let url = client
//!     .avatars()
//!     .qr("hello", Some(400), Some(10), Some(true))
//!     .unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://x.io/v1/avatars/qr?text=hello&size=400&margin=10&download=true&project=p1"
//! );
//! ```

pub mod avatars;
mod client;
mod config;
mod error;
pub mod params;
pub mod path;

pub use avatars::{
    Avatars, Browser, BrowserIcon, CreditCard, CreditCardIcon, Endpoint, Favicon, Flag, FlagIcon,
    IconOptions, Initials, Prepared, QrCode, RemoteImage,
};
pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use params::Params;
pub use path::PathTemplate;
pub use url::Url;
