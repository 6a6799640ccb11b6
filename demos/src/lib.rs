//! Helpers shared by the demo programs.
//!
//! Every demo accepts the following options:
//!
//! * `--config <path>`: a TOML file with scene [configuration][Config].
//!   Omitted fields take their default values.
//! * `--size <w>x<h>`: the size of the window or image in pixels.
//! * `--time <secs>`: the time at which to render a still image.
//! * `--out <path>`: the file to write a still image to.
//!
//! Logging is controlled by the `RUST_LOG` environment variable and
//! defaults to the `info` level.

use std::{error::Error, fs, path::PathBuf};

use env_logger::Env;
use log::info;

use nr::{scene::Config, util::Dims};

/// Result type returned by the demos.
pub type Result<T = ()> = std::result::Result<T, Box<dyn Error>>;

/// Command line options of the demos.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub size: Option<Dims>,
    pub time: Option<f64>,
    pub out: Option<PathBuf>,
}

/// Initializes the logger.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

impl Args {
    /// Parses options from `args`, not including the program name.
    ///
    /// # Errors
    /// If an option is unknown, is missing its value, or has an invalid value.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut res = Self::default();
        let mut args = args.into_iter();
        while let Some(opt) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| format!("missing value for option {opt}"))
            };
            match opt.as_str() {
                "--config" => res.config = Some(value()?.into()),
                "--size" => res.size = Some(parse_dims(&value()?)?),
                "--time" => res.time = Some(value()?.parse()?),
                "--out" => res.out = Some(value()?.into()),
                _ => return Err(format!("unknown option {opt}").into()),
            }
        }
        Ok(res)
    }

    /// Returns the scene configuration, loaded from the file given with
    /// `--config` if any, or the default configuration otherwise.
    pub fn scene_config(&self) -> Result<Config> {
        let Some(path) = &self.config else {
            return Ok(Config::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {e}", path.display()))?;
        let cfg = parse_config(&text)?;
        info!("loaded configuration from {}", path.display());
        Ok(cfg)
    }
}

/// Parses a scene configuration from TOML.
pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

/// Parses a size of the form `<width>x<height>`.
pub fn parse_dims(s: &str) -> Result<Dims> {
    let (w, h) = s
        .split_once(['x', '×'])
        .ok_or_else(|| format!("invalid size {s}, expected <w>x<h>"))?;
    let dims = Dims(w.trim().parse()?, h.trim().parse()?);
    if dims.area() == 0 {
        return Err(format!("invalid size {s}: zero width or height").into());
    }
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use nr::scene::{Layers, Quality};

    use super::*;

    fn args(s: &str) -> Result<Args> {
        Args::parse(s.split_whitespace().map(String::from))
    }

    #[test]
    fn parse_all_options() {
        let a = args("--size 320x200 --time 12.5 --out a.ppm --config c.toml");
        assert_eq!(
            a.unwrap(),
            Args {
                config: Some("c.toml".into()),
                size: Some(Dims(320, 200)),
                time: Some(12.5),
                out: Some("a.ppm".into()),
            }
        );
    }

    #[test]
    fn parse_no_options() {
        assert_eq!(args("").unwrap(), Args::default());
        assert_eq!(args("").unwrap().scene_config().unwrap(), Config::default());
    }

    #[test]
    fn parse_errors() {
        assert!(args("--size").is_err());
        assert!(args("--size 0x100").is_err());
        assert!(args("--size 100").is_err());
        assert!(args("--time soon").is_err());
        assert!(args("--frobnicate").is_err());
    }

    #[test]
    fn config_from_toml() {
        let cfg = parse_config(
            r#"
            quality = "low"
            rain = false
            lane_bias = 0.8
            layers = "TAIL | SKY"
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg,
            Config::default()
                .quality(Quality::Low)
                .rain(false)
                .lane_bias(0.8)
                .layers(Layers::TAIL | Layers::SKY)
        );
    }

    #[test]
    fn config_rejects_unknown_fields() {
        assert!(parse_config("quality = \"high\"\nspeed = 3").is_err());
        assert!(parse_config("quality = \"ultra\"").is_err());
    }
}
