use avatars_client::{
    Avatars, BrowserIcon, CreditCardIcon, Favicon, FlagIcon, IconOptions, Initials, QrCode,
    RemoteImage, Url,
};

#[derive(clap::Args, Debug, Default)]
pub(crate) struct IconArgs {
    /// Width of the image, in pixels
    #[clap(long)]
    width: Option<u32>,
    /// Height of the image, in pixels
    #[clap(long)]
    height: Option<u32>,
    /// Quality of the image, from 0 to 100
    #[clap(long)]
    quality: Option<u32>,
}

impl From<&IconArgs> for IconOptions {
    fn from(value: &IconArgs) -> Self {
        IconOptions::new(value.width, value.height, value.quality)
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Icon of a browser, from its code (ch, ff, sf...)
    Browser {
        code: String,
        #[clap(flatten)]
        options: IconArgs,
    },
    /// Icon of a credit card provider (amex, visa, mastercard...)
    CreditCard {
        code: String,
        #[clap(flatten)]
        options: IconArgs,
    },
    /// Favicon of a remote website
    Favicon { url: String },
    /// Country flag, from a ISO 3166-1 alpha-2 code
    Flag {
        code: String,
        #[clap(flatten)]
        options: IconArgs,
    },
    /// Remote image, cropped to the given size
    Image {
        url: String,
        #[clap(long)]
        width: Option<u32>,
        #[clap(long)]
        height: Option<u32>,
    },
    /// Initials avatar of a user
    Initials {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        width: Option<u32>,
        #[clap(long)]
        height: Option<u32>,
        /// Background color, as hex without the leading '#'
        #[clap(long)]
        background: Option<String>,
    },
    /// QR code of a text
    Qr {
        text: String,
        #[clap(long)]
        size: Option<u32>,
        #[clap(long)]
        margin: Option<u32>,
        #[clap(long)]
        download: Option<bool>,
    },
}

impl Command {
    pub(crate) fn execute(&self, avatars: &Avatars) -> avatars_client::Result<Url> {
        match self {
            Self::Browser { code, options } => {
                avatars.url(&BrowserIcon::new(code).with_options(options.into()))
            }
            Self::CreditCard { code, options } => {
                avatars.url(&CreditCardIcon::new(code).with_options(options.into()))
            }
            Self::Favicon { url } => avatars.url(&Favicon::new(url)),
            Self::Flag { code, options } => {
                avatars.url(&FlagIcon::new(code).with_options(options.into()))
            }
            Self::Image { url, width, height } => avatars.url(&RemoteImage {
                url: Some(url.clone()),
                width: *width,
                height: *height,
            }),
            Self::Initials {
                name,
                width,
                height,
                background,
            } => avatars.url(&Initials {
                name: name.clone(),
                width: *width,
                height: *height,
                background: background.clone(),
            }),
            Self::Qr {
                text,
                size,
                margin,
                download,
            } => avatars.url(&QrCode {
                text: Some(text.clone()),
                size: *size,
                margin: *margin,
                download: *download,
            }),
        }
    }
}
