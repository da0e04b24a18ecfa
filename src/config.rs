//! Launch configuration from command-line arguments.
//!
//! ```text
//! reprlab [IMAGE] [--bits 8|16|32] [--tool number|text|decoder|pixel]
//! ```
//!
//! A missing image is reported as a warning; the lab still starts.

use std::path::PathBuf;

use clap::Parser;

use crate::app::Tool;
use crate::repr::BitWidth;

/// Digital Representation Lab: number, text and pixel encodings.
#[derive(Debug, Parser)]
#[command(name = "reprlab", version)]
pub struct CLIArg {
    /// Image to open in the pixel inspector
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Starting bit width for the number lab
    #[arg(long, short = 'b', value_enum, value_name = "BITS")]
    pub bits: Option<BitWidth>,

    /// Tool shown at startup [default: pixel when IMAGE is given, else number]
    #[arg(long, short = 't', value_enum, value_name = "TOOL")]
    pub tool: Option<Tool>,
}

/// Startup settings.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Config {
    /// Image to open in the pixel inspector.
    pub initial_image: Option<PathBuf>,
    pub width: BitWidth,
    pub tool: Tool,
    /// Problems found while resolving arguments, for the caller to log.
    pub warnings: Vec<String>,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn try_from_args<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString>,
    {
        let argv = std::iter::once(std::ffi::OsString::from("reprlab"))
            .chain(args.into_iter().map(Into::into));
        let cli_arg = CLIArg::try_parse_from(argv)?;
        Ok(Self::from(cli_arg))
    }

    /// Parse the process arguments. Prints usage and exits on malformed flags.
    pub fn from_env() -> Self {
        Self::from(CLIArg::parse())
    }
}

impl From<CLIArg> for Config {
    fn from(cli_arg: CLIArg) -> Self {
        let mut warnings = Vec::new();

        let initial_image = cli_arg.image.and_then(|path| {
            if path.exists() {
                Some(path)
            } else {
                warnings.push(format!("file not found: {}", path.display()));
                None
            }
        });

        // An image on the command line means the user wants to inspect it
        let tool = match (cli_arg.tool, &initial_image) {
            (Some(tool), _) => tool,
            (None, Some(_)) => Tool::Pixel,
            (None, None) => Tool::default(),
        };

        Self {
            initial_image,
            width: cli_arg.bits.unwrap_or_default(),
            tool,
            warnings,
        }
    }
}
