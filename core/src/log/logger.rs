use log::LevelFilter;
use log4rs::config::Logger;
use std::{collections::HashMap, env, mem, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum LogError {
    #[error("Logger spec parsing error: {0}")]
    ParseLoggerSpecError(String),

    #[error("Appender '{0}' could not be created: {1}")]
    Appender(&'static str, String),

    #[error("Logger configuration error: {0}")]
    Config(String),
}

/// A single `target=level` directive. Targets inherit the root appenders.
#[derive(Clone, Debug)]
pub(super) struct LoggerSpec {
    pub name: String,
    pub level: LevelFilter,
}

impl LoggerSpec {
    pub fn logger(&self) -> Logger {
        Logger::builder().build(self.name.clone(), self.level)
    }
}

pub(super) struct Loggers {
    loggers: Vec<LoggerSpec>,
    root_level: LevelFilter,
}

impl Loggers {
    pub fn root_level(&self) -> LevelFilter {
        self.root_level
    }

    pub fn items(&self) -> impl Iterator<Item = Logger> + '_ {
        self.loggers.iter().map(|x| x.logger())
    }

    #[cfg(test)]
    fn find(&self, name: &str) -> Option<&LoggerSpec> {
        self.loggers.iter().find(|x| x.name == name)
    }
}

/// Collects logging directives of the form `level,target=level,...`.
///
/// A bare level sets the root level, a bare target enables it at the most verbose level.
pub(super) struct Builder {
    loggers: HashMap<String, LevelFilter>,
    root_level: Option<LevelFilter>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder { loggers: HashMap::new(), root_level: None }
    }

    pub fn parse_env(&mut self, env: &str) -> &mut Self {
        self.parse_expression(&env::var(env).unwrap_or_default())
    }

    pub fn parse_expression(&mut self, expression: &str) -> &mut Self {
        for spec in expression.split(',').map(|x| x.trim()).filter(|x| !x.is_empty()) {
            match Self::parse_directive(spec) {
                Ok((level, Some(name))) => {
                    self.logger(name.to_string(), level);
                }
                Ok((level, None)) => {
                    self.root_level(level);
                }
                // The logger is not up yet, so stdout is the only place to complain
                Err(err) => println!("Ignoring invalid logging spec '{}'", err),
            }
        }
        self
    }

    fn parse_directive(spec: &str) -> Result<(LevelFilter, Option<&str>), LogError> {
        let mut parts = spec.split('=');
        match (parts.next(), parts.next().map(|x| x.trim()), parts.next()) {
            (Some(part0), None, None) => match part0.parse() {
                Ok(level) => Ok((level, None)),
                Err(_) => Ok((LevelFilter::max(), Some(part0))),
            },
            (Some(part0), Some(""), None) => Ok((LevelFilter::max(), Some(part0))),
            (Some(part0), Some(part1), None) => {
                part1.parse().map(|level| (level, Some(part0))).map_err(|_| LogError::ParseLoggerSpecError(part1.to_string()))
            }
            _ => Err(LogError::ParseLoggerSpecError(spec.to_string())),
        }
    }

    pub fn root_level(&mut self, root_level: LevelFilter) -> &mut Self {
        self.root_level.replace(root_level);
        self
    }

    pub fn logger(&mut self, name: String, level: LevelFilter) -> &mut Self {
        self.loggers.insert(name, level);
        self
    }

    pub fn build(&mut self) -> Loggers {
        let loggers = mem::take(&mut self.loggers)
            .into_iter()
            .map(|(name, level)| LoggerSpec { name, level })
            .collect::<Vec<_>>();
        Loggers { loggers, root_level: self.root_level.take().unwrap_or(LevelFilter::Error) }
    }
}

impl FromStr for Builder {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = Self::new();
        builder.parse_expression(s);
        Ok(builder)
    }
}
