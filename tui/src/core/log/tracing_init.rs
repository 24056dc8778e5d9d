// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

use crate::CommonResult;

/// Where log output should go. Writing to stdout would corrupt the very screen
/// this crate paints, so file output is the default for interactive use.
#[derive(Debug, Clone)]
pub enum WriterConfig {
    Stderr,
    File(String),
}

/// Initialize the global tracing subscriber. Opt-in: the engine itself never
/// calls this; binaries embedding it do, once, at startup.
///
/// The level filter honors `RUST_LOG` and defaults to `warn`.
///
/// Returns an error if a file writer is requested and the path has no parent
/// directory or file name, or if a global subscriber is already set.
pub fn try_initialize_logging(writer_config: WriterConfig) -> CommonResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match writer_config {
        WriterConfig::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .finish()
                .try_init()
                .map_err(|err| miette::miette!("{err}"))?;
        }
        WriterConfig::File(path_str) => {
            let appender = try_create_file_appender(&path_str)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(appender)
                .with_ansi(false)
                .finish()
                .try_init()
                .map_err(|err| miette::miette!("{err}"))?;
        }
    }

    crate::ok!()
}

/// Returns an error if the path has no parent directory or no file name, or if
/// permissions are insufficient.
pub fn try_create_file_appender(
    path_str: &str,
) -> CommonResult<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!("Can't determine parent folder of {}", path.display())
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't determine file name of {}", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_appender_rejects_path_without_file_name() {
        assert!(try_create_file_appender("/").is_err());
    }
}
