use std::io::{self, Write};

use anyhow::Context;

use crate::config::DemoConfig;

/// Writes `a`, `b` and `a × b` to `out`, one vector per line.
pub fn render_demo(config: &DemoConfig, out: &mut impl Write) -> io::Result<()> {
    let c = config.a.cross(&config.b);
    log::debug!("cross({}, {}) = {}", config.a, config.b, c);

    writeln!(out, "{}", config.a)?;
    writeln!(out, "{}", config.b)?;
    writeln!(out, "{}", c)?;
    Ok(())
}

/// Entry point of the demo binary. An optional first argument names a JSON
/// [`DemoConfig`].
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let stderr = io::stderr();
    render_demo(&config, &mut stderr.lock()).context("failed to write demo output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn render(config: &DemoConfig) -> String {
        let mut out = Vec::new();
        render_demo(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_demo_output() {
        assert_eq!(render(&DemoConfig::default()), "(1 1 1)\n(-1 -1 -1)\n(0 0 0)\n");
    }

    #[test]
    fn test_axes_demo_output() {
        let config = DemoConfig {
            a: Vec3::new(1.0, 0.0, 0.0),
            b: Vec3::new(0.0, 1.0, 0.0),
        };
        assert_eq!(render(&config), "(1 0 0)\n(0 1 0)\n(0 0 1)\n");
    }
}
